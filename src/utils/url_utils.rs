// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 在URL上追加语言选择查询参数
///
/// 已有查询串时使用`&`连接，否则使用`?`
pub fn with_locale_param(url: &str, locale: &str) -> String {
    let separator = if url.contains('?') { '&' } else { '?' };
    format!("{}{}l={}", url, separator, locale)
}
