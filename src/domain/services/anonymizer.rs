//! # Email Anonymizer
//!
//! ログ本文に含まれるメールアドレスを部分的に伏せる

use regex::{Captures, Regex};
use std::borrow::Cow;
use std::sync::LazyLock;

/// メールアドレスの正規表現。初回使用時に一度だけコンパイルする。
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}")
        .expect("Invalid email regex pattern")
});

/// メールアドレス1件をマスクする
///
/// ローカル部の先頭1文字と末尾1文字だけを残し、間を `*` 1文字にする。
/// ドメインはそのまま残す。
///
/// ```
/// use logreport::domain::services::anonymizer::mask_email;
///
/// assert_eq!(mask_email("john.doe@example.com"), "j*e@example.com");
/// // ローカル部が1文字の場合は末尾文字を繰り返さない
/// assert_eq!(mask_email("a@x.com"), "a*@x.com");
/// ```
pub fn mask_email(email: &str) -> String {
    let Some(at) = email.find('@') else {
        return email.to_string();
    };

    let mut local = email[..at].chars();
    let Some(first) = local.next() else {
        return email.to_string();
    };
    let last = local.next_back();

    let mut masked = String::with_capacity(email.len());
    masked.push(first);
    masked.push('*');
    if let Some(last) = last {
        masked.push(last);
    }
    masked.push_str(&email[at..]);
    masked
}

/// 本文中のすべてのメールアドレスをマスクする
///
/// メールアドレスを含まない場合は借用のまま返す。
pub fn anonymize(text: &str) -> Cow<'_, str> {
    EMAIL_RE.replace_all(text, |caps: &Captures<'_>| mask_email(&caps[0]))
}
