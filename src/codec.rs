//! 整数 ↔ base-32 码串编解码.
//!
//! 编码把 u64 拆成 5-bit 组（最高位在前）映射到规范符号；解码逐符号
//! 反查累加。码长与数值大小解耦：不足处用零符号 'A' 左填充，因此
//! "AAA1" 与 "1" 解码为同一个值——这是有意设计的碰撞，不是缺陷。

use crate::charset::{symbol_to_index, RADIX, SYMBOLS};
use crate::checksum;
use crate::error::{Error, Result};

/// 编码为自然长度（最短）的码串，不带校验位.
///
/// # Example
/// ```
/// assert_eq!(cupkit::codec::encode(1234), "16J");
/// assert_eq!(cupkit::codec::encode(0), "A");
/// ```
#[must_use]
pub fn encode(value: u64) -> String {
    render(value, natural_length(value))
}

/// 编码为固定 `length` 位的码串，高位用 'A' 填充.
///
/// # Errors
/// `value >= 32^length` 时返回 `Error::Overflow`，不做任何编码工作。
/// `32^length` 超出 u64 时任何值都放得下。
pub fn encode_with_length(value: u64, length: u32) -> Result<String> {
    if RADIX
        .checked_pow(length)
        .is_some_and(|capacity| value >= capacity)
    {
        return Err(Error::Overflow { value, length });
    }
    Ok(render(value, length))
}

/// 自然长度编码并追加 Luhn mod 32 校验位.
#[must_use]
pub fn encode_with_check_digit(value: u64) -> String {
    append_check_digit(encode(value))
}

/// 固定长度编码并追加校验位，校验位不计入 `length`.
///
/// # Errors
/// 同 [`encode_with_length`]。
pub fn encode_with_length_and_check_digit(value: u64, length: u32) -> Result<String> {
    Ok(append_check_digit(encode_with_length(value, length)?))
}

/// 解码码串为整数，接受别名与任意大小写.
///
/// 左侧的零符号只起填充作用：`decode("AAA1") == decode("1") == 1`。
///
/// # Errors
/// - `Error::InvalidSymbol`：首个接受域之外的字符。
/// - `Error::ValueOutOfRange`：数值超出 u64 表示范围。
pub fn decode(code: &str) -> Result<u64> {
    let mut value: u64 = 0;
    for c in code.chars() {
        let group = u64::from(symbol_to_index(c).ok_or(Error::InvalidSymbol(c))?);
        value = value
            .checked_mul(RADIX)
            .and_then(|v| v.checked_add(group))
            .ok_or_else(|| Error::ValueOutOfRange(code.to_string()))?;
    }
    Ok(value)
}

/// 先验证末位校验位，通过后去掉它再解码.
///
/// # Errors
/// - `Error::InvalidSymbol`：任何位置出现接受域之外的字符。
/// - `Error::ChecksumMismatch`：符号全部合法但校验位不符。
/// - `Error::ValueOutOfRange`：数值超出 u64 表示范围。
pub fn decode_with_check_digit(code: &str) -> Result<u64> {
    let total = checksum::luhn_total(code, 1)?;
    let body = match code.char_indices().last() {
        Some((last, digit)) => {
            if total % RADIX != 0 {
                return Err(Error::ChecksumMismatch {
                    digit,
                    code: code[..last].to_string(),
                });
            }
            &code[..last]
        }
        // 空串按零比特串处理，与 decode("") 一致
        None => code,
    };
    decode(body)
}

/// 容纳 `value` 所需的最小位数，0 约定为 1 位
#[must_use]
pub const fn natural_length(value: u64) -> u32 {
    if value == 0 {
        1
    } else {
        value.ilog(RADIX) + 1
    }
}

/// 按 5-bit 组渲染，最高位组在前；调用方保证 value < 32^length
fn render(value: u64, length: u32) -> String {
    let mut buf = vec![SYMBOLS[0]; length as usize];
    let mut rest = value;
    let mut i = buf.len();
    while rest != 0 && i > 0 {
        i -= 1;
        #[allow(clippy::cast_possible_truncation)]
        let group = (rest & 0x1F) as usize;
        buf[i] = SYMBOLS[group];
        rest >>= 5;
    }
    // SYMBOLS 均为 ASCII，from_utf8 必定成功
    #[allow(clippy::unwrap_used)]
    String::from_utf8(buf).unwrap()
}

/// 追加校验位；编码输出只含规范符号，计算必定成功
fn append_check_digit(mut code: String) -> String {
    #[allow(clippy::unwrap_used)]
    let digit = checksum::check_digit(&code).unwrap();
    code.push(digit);
    code
}
