//! Luhn mod N 校验位 (N = 32).
//!
//! 从最后一个符号向前处理，乘数在 2/1 间交替；乘积按整数除法折叠
//! (addend/32 + addend%32) 后累加。校验位取 (32 - total%32) % 32 对应
//! 的规范符号，使整串在 [`validate`] 下总和模 32 为零。
//! 左侧的 'A' (码点 0) 在任何乘数下都贡献 0，校验位因此忽略左填充。

use crate::charset::{symbol_to_index, RADIX, SYMBOLS};
use crate::error::{Error, Result};

/// 计算 Luhn mod 32 校验位.
///
/// 乘数从 2 开始（最后一个符号乘 2）。对别名与大小写不敏感：
/// "a16j" 与 "A16J" 得到同一个校验位。
///
/// # Errors
/// 码串含接受域之外的字符时返回 `Error::InvalidSymbol`。
pub fn check_digit(code: &str) -> Result<char> {
    let total = luhn_total(code, 2)?;
    // 余数与校验值都落在 0..32 内
    #[allow(clippy::cast_possible_truncation)]
    let check = ((RADIX - total % RADIX) % RADIX) as usize;
    Ok(char::from(SYMBOLS[check]))
}

/// 验证「码串 + 末位校验位」整体是否自洽.
///
/// 与「重算校验位再比对」等价，但乘数相位不同：校验位本身占据乘 1
/// 的末位，所以从 1 开始交替并处理整串。含无效字符的输入直接视为
/// 不合法，不报错。
#[must_use]
pub fn validate(code: &str) -> bool {
    matches!(luhn_total(code, 1), Ok(total) if total % RADIX == 0)
}

/// 交替乘数折叠求和，`initial_factor` 作用于最后一个符号
pub(crate) fn luhn_total(code: &str, initial_factor: u64) -> Result<u64> {
    let mut factor = initial_factor;
    let mut total = 0;
    for c in code.chars().rev() {
        let value = u64::from(symbol_to_index(c).ok_or(Error::InvalidSymbol(c))?);
        let addend = factor * value;
        factor = if factor == 2 { 1 } else { 2 };
        // 折叠必须用整数除法，商和余数各自落在 0..32 内
        total += addend / RADIX + addend % RADIX;
    }
    Ok(total)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_known_digits() {
        // 手算向量：J=18 乘 2 折叠为 5，6 乘 1，1 乘 2，A 贡献 0，
        // 总和 13，校验值 19 → 'K'
        assert_eq!(check_digit("A16J").unwrap(), 'K');
        assert_eq!(check_digit("1").unwrap(), 'Y');
        // 空串总和为 0，校验位是零符号
        assert_eq!(check_digit("").unwrap(), 'A');
    }

    #[test]
    fn test_validate_known_codes() {
        assert!(validate("A16JK"));
        assert!(validate("1Y"));
        assert!(!validate("A16JM"));
        assert!(!validate("1A"));
    }

    #[test]
    fn test_digit_ignores_leading_zero_symbols() {
        assert_eq!(check_digit("16J").unwrap(), check_digit("A16J").unwrap());
        assert_eq!(check_digit("16J").unwrap(), check_digit("AAAAA16J").unwrap());
    }

    #[test]
    fn test_case_and_alias_insensitive() {
        assert_eq!(check_digit("a16j").unwrap(), check_digit("A16J").unwrap());
        // I 与 L 按 '1' 的码点计
        assert_eq!(check_digit("AI6J").unwrap(), check_digit("A16J").unwrap());
        assert!(validate("a16jk"));
        assert!(validate("AL6JK"));
    }

    #[test]
    fn test_invalid_symbol() {
        assert!(matches!(check_digit("A$"), Err(Error::InvalidSymbol('$'))));
        assert!(matches!(check_digit("AU"), Err(Error::InvalidSymbol('U'))));
        assert!(!validate("A16J$"));
    }

    #[test]
    fn test_single_substitution_detected() {
        // 乘 2 折叠在 0..32 上是单射，替换任何一个符号（含校验位
        // 本身）都会破坏总和
        let body = "6N69G69ZKC";
        let full = format!("{body}{}", check_digit(body).unwrap());
        assert!(validate(&full));
        for pos in 0..full.len() {
            let original = full.as_bytes()[pos];
            for &substitute in SYMBOLS {
                if substitute == original {
                    continue;
                }
                let mut mutated = full.clone().into_bytes();
                mutated[pos] = substitute;
                let mutated = String::from_utf8(mutated).unwrap();
                assert!(
                    !validate(&mutated),
                    "substitution '{}' at {pos} not caught",
                    substitute as char
                );
            }
        }
    }

    #[test]
    fn test_adjacent_transposition_detected() {
        // "16" 对换成 "61" 会被捕获
        assert!(validate("A16JK"));
        assert!(!validate("A61JK"));
        assert!(!validate("1A6JK"));
    }

    #[test]
    fn test_transposition_blind_spot() {
        // 已知盲点：相邻的 'A' (0) 与 'Z' (31) 对换无法检出，
        // 它们是唯一一对模 31 同余的码点
        let digit = check_digit("AZ").unwrap();
        let intact = format!("AZ{digit}");
        let swapped = format!("ZA{digit}");
        assert!(validate(&intact));
        assert!(validate(&swapped));
    }

    #[test]
    fn test_validate_empty() {
        // 空串总和为 0，按定义自洽
        assert!(validate(""));
    }
}
