//! 字符集定义
//!
//! 32 符号 base-32 变体：0-9 加上 A-Z 中去掉 I/L/O/U 的 22 个字母。
//! 'A' 是零符号，左填充得到 "AAAY1" 而不是 "000Y1"。
//! 反查表在编译期由规范表生成：大小写两种形式一起注册，另收录易混淆
//! 别名 I/L → '1'、O → '0'，解码因此天然大小写不敏感、抄错容忍。

/// 规范符号表，下标即 5-bit 码点值 (0-31)
pub const SYMBOLS: &[u8; 32] = b"A1234567890BCDEFGHJKMNPQRSTVWXYZ";

/// 基数，即符号表大小
pub const RADIX: u64 = 32;

/// 易混淆别名 → 同码点的规范符号
const ALIASES: [(u8, u8); 3] = [(b'I', b'1'), (b'L', b'1'), (b'O', b'0')];

/// 反查表：字节 → 码点，-1 表示不在接受域内
static REVERSE: [i8; 256] = build_reverse();

/// 由规范表生成反查表，避免两张手写表各自漂移
const fn build_reverse() -> [i8; 256] {
    let mut table = [-1i8; 256];
    let mut i = 0;
    while i < SYMBOLS.len() {
        // 表长 32，码点恒在 i8 范围内
        #[allow(clippy::cast_possible_truncation)]
        let value = i as i8;
        let c = SYMBOLS[i];
        table[c as usize] = value;
        table[c.to_ascii_lowercase() as usize] = value;
        i += 1;
    }
    let mut j = 0;
    while j < ALIASES.len() {
        let alias = ALIASES[j].0;
        let canonical = ALIASES[j].1;
        table[alias as usize] = table[canonical as usize];
        table[alias.to_ascii_lowercase() as usize] = table[canonical as usize];
        j += 1;
    }
    table
}

/// 码点 (0-31) 转规范符号，越界返回 None
#[inline]
pub fn index_to_symbol(i: u8) -> Option<u8> {
    SYMBOLS.get(i as usize).copied()
}

/// 符号转码点，接受别名与两种大小写，无效字符返回 None
#[inline]
pub fn symbol_to_index(c: char) -> Option<u8> {
    if !c.is_ascii() {
        return None;
    }
    u8::try_from(REVERSE[c as usize]).ok()
}

/// 验证字符是否在解码接受域内
#[inline]
pub fn is_valid_symbol(c: char) -> bool {
    symbol_to_index(c).is_some()
}
