//! `CupKit` - Coupon Code Kit
//!
//! 把非负整数映射为简短、大小写不敏感的 base-32 字母数字码（优惠码、
//! 邀请码、对局口令等场景），可选追加 Luhn mod 32 校验位，检测单字符
//! 抄错与绝大多数相邻对换。整数与码串一一对应、无碰撞，但本算法
//! 不抗猜测，不承担任何密码学职责。
//!
//! # 码格式
//!
//! ```text
//! ┌──────────────────────────────┬────────────────┐
//! │  Code (base-32 符号串)       │  校验位 (可选) │
//! │  每符号 5 bit，高位在前      │  1 符号        │
//! └──────────────────────────────┴────────────────┘
//! 字母表: 0-9 + A-Z 去掉 I/L/O/U，'A' 为零符号
//! 解码另接受小写与易混淆别名: I/L → 1, O → 0
//! ```
//!
//! 码长与数值解耦：高位用零符号 'A' 填充，所以 "AAA1" 与 "1" 解码为
//! 同一个值。这是有意设计（"AAAY1" 比 "000Y1" 不易抄错），校验位
//! 同样忽略左侧的 'A'。
//!
//! # Example
//!
//! ```
//! use cupkit::Codec;
//!
//! // 固定 4 位 + 校验位
//! let code = Codec::encode_with_length_and_check_digit(1234, 4).unwrap();
//! assert_eq!(code, "A16JK");
//!
//! // 解码对大小写与别名不敏感
//! assert_eq!(Codec::decode_with_check_digit("a16jk").unwrap(), 1234);
//!
//! // 填充碰撞是有意设计
//! assert_eq!(Codec::decode("AAA1").unwrap(), Codec::decode("1").unwrap());
//! ```

pub mod charset;
pub mod checksum;
pub mod codec;
pub mod error;

// Re-exports
pub use charset::{RADIX, SYMBOLS};
pub use error::{Error, Result};

/// 编解码操作的便捷入口
pub struct Codec;

impl Codec {
    /// 编码为自然长度（最短）的码串
    #[must_use]
    pub fn encode(value: u64) -> String {
        codec::encode(value)
    }

    /// 编码为固定 `length` 位的码串，高位用 'A' 填充
    ///
    /// # Errors
    /// 见 [`codec::encode_with_length`]。
    pub fn encode_with_length(value: u64, length: u32) -> Result<String> {
        codec::encode_with_length(value, length)
    }

    /// 自然长度编码并追加校验位
    #[must_use]
    pub fn encode_with_check_digit(value: u64) -> String {
        codec::encode_with_check_digit(value)
    }

    /// 固定长度编码并追加校验位
    ///
    /// # Errors
    /// 见 [`codec::encode_with_length_and_check_digit`]。
    pub fn encode_with_length_and_check_digit(value: u64, length: u32) -> Result<String> {
        codec::encode_with_length_and_check_digit(value, length)
    }

    /// 解码码串为整数
    ///
    /// # Errors
    /// 见 [`codec::decode`]。
    pub fn decode(code: &str) -> Result<u64> {
        codec::decode(code)
    }

    /// 验证末位校验位后解码
    ///
    /// # Errors
    /// 见 [`codec::decode_with_check_digit`]。
    pub fn decode_with_check_digit(code: &str) -> Result<u64> {
        codec::decode_with_check_digit(code)
    }

    /// 计算码串的 Luhn mod 32 校验位
    ///
    /// # Errors
    /// 见 [`checksum::check_digit`]。
    pub fn check_digit(code: &str) -> Result<char> {
        checksum::check_digit(code)
    }

    /// 验证「码串 + 校验位」整体是否自洽
    #[must_use]
    pub fn validate(code: &str) -> bool {
        checksum::validate(code)
    }
}
