// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::utils::errors::FetchError;
use crate::utils::url_utils::with_locale_param;
use std::time::Duration;
use tracing::debug;

/// 抓取引擎
///
/// 基于reqwest实现的基本HTTP抓取引擎，仅接受200状态码
pub struct FetchEngine {
    client: reqwest::Client,
    locale: String,
}

impl FetchEngine {
    /// 创建抓取引擎
    ///
    /// # 参数
    ///
    /// * `locale` - 商店页面语言参数值
    /// * `timeout` - 请求超时时间
    pub fn new(locale: &str, timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .user_agent("Mozilla/5.0 (compatible; detailrs/0.1)")
            .timeout(timeout)
            .build()?;
        Ok(Self {
            client,
            locale: locale.to_string(),
        })
    }

    /// 抓取商店产品页面
    ///
    /// 在URL上追加语言参数后执行GET
    pub async fn fetch_product_page(&self, url: &str) -> Result<String, FetchError> {
        let url = with_locale_param(url, &self.locale);
        self.fetch(&url).await
    }

    /// 执行一次GET请求
    ///
    /// # 返回值
    ///
    /// * `Ok(String)` - 状态码为200时的响应正文
    /// * `Err(FetchError)` - 其他状态码或传输错误
    pub async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        debug!("GET {}", url);
        let response = self.client.get(url).send().await?;
        let status = response.status().as_u16();
        if status != 200 {
            return Err(FetchError::BadStatus {
                url: url.to_string(),
                status,
            });
        }
        Ok(response.text().await?)
    }
}

#[cfg(test)]
#[path = "fetch_engine_test.rs"]
mod tests;
