//! 文本解码
//!
//! 非法 UTF-8 字节替换为 U+FFFD，CRLF 与单独的 CR 统一为 LF

use std::borrow::Cow;

/// 解码结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedText {
    pub text: String,
    /// 是否发生过字节替换
    pub lossy: bool,
}

pub fn decode_text(bytes: &[u8]) -> DecodedText {
    let (text, lossy) = match String::from_utf8_lossy(bytes) {
        Cow::Borrowed(text) => (text.to_string(), false),
        Cow::Owned(text) => (text, true),
    };
    DecodedText {
        text: normalize_newlines(text),
        lossy,
    }
}

fn normalize_newlines(text: String) -> String {
    if !text.contains('\r') {
        return text;
    }
    text.replace("\r\n", "\n").replace('\r', "\n")
}
