use super::error::{backend_error, ApiError};
use super::query::QueryParams;
use crate::shared::config::ClientConfig;
use serde_json::Value;
use std::fs::OpenOptions;
use std::io::Write;

/// Контекст сессии: выбранная база данных и залогиненный
/// пользователь. Задаётся при входе и передаётся клиенту явно,
/// глобального состояния нет.
#[derive(Debug, Clone)]
pub struct SessionContext {
    pub database: String,
    pub user: String,
}

impl SessionContext {
    pub fn new(database: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            database: database.into(),
            user: user.into(),
        }
    }
}

/// HTTP-клиент бэкенда каталога.
///
/// Каждая операция — POST на путь ресурса; параметры сессии
/// (`DBServer`, `LoggedUser`) добавляются к каждому запросу после
/// параметров операции.
pub struct RestClient {
    client: reqwest::Client,
    base_url: String,
    session: SessionContext,
}

impl RestClient {
    pub fn new(base_url: impl Into<String>, session: SessionContext) -> Self {
        Self::with_timeout(base_url, session, 30)
    }

    pub fn with_timeout(
        base_url: impl Into<String>,
        session: SessionContext,
        timeout_secs: u64,
    ) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(timeout_secs))
                .build()
                .expect("Failed to create HTTP client"),
            base_url: base_url.into(),
            session,
        }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::with_timeout(
            config.api.base_url.clone(),
            SessionContext::new(&config.session.database, &config.session.user),
            config.api.timeout_secs,
        )
    }

    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    /// Записать в лог-файл
    fn log_to_file(&self, message: &str) {
        if let Ok(mut file) = OpenOptions::new()
            .create(true)
            .append(true)
            .open("catalog_api_requests.log")
        {
            let timestamp = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S%.3f");
            let _ = writeln!(file, "[{}] {}", timestamp, message);
        }
    }

    /// Собрать полный URL: путь ресурса, параметры операции и
    /// параметры сессии
    fn build_url(&self, path: &str, params: &QueryParams) -> String {
        let mut query = params.clone();
        query.set("DBServer", &self.session.database);
        query.set("LoggedUser", &self.session.user);

        let mut url = format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        let query_string = query.build();
        if !query_string.is_empty() {
            url.push('?');
            url.push_str(&query_string);
        }
        url
    }

    /// Выполнить один запрос к бэкенду и вернуть сырое тело ответа.
    ///
    /// Не-2xx ответ становится `ApiError::Backend` с сообщением для
    /// пользователя; 2xx с телом не-JSON трактуется как «нет данных»
    /// (`null`), не как ошибка.
    pub async fn execute(
        &self,
        path: &str,
        params: QueryParams,
        body: Option<Value>,
    ) -> Result<Value, ApiError> {
        let url = self.build_url(path, &params);

        let body_text = body.as_ref().map(|b| b.to_string());
        self.log_to_file(&format!(
            "=== REQUEST ===\nPOST {}\nBody: {}",
            url,
            body_text.as_deref().unwrap_or("-")
        ));
        tracing::debug!("POST {}", url);

        let mut request = self
            .client
            .post(&url)
            .header("Content-Type", "application/json");
        if let Some(body) = &body {
            request = request.json(body);
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                let error_msg = if e.is_timeout() {
                    format!("Request timeout: {}", e)
                } else if e.is_connect() {
                    format!("Connection error: {}", e)
                } else {
                    format!("Request error: {}", e)
                };
                self.log_to_file(&format!("ERROR {}", error_msg));
                tracing::error!("Catalog API request failed: {}", error_msg);
                return Err(ApiError::Transport(error_msg));
            }
        };

        let status = response.status();
        self.log_to_file(&format!("Response status: {}", status));

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            self.log_to_file(&format!("ERROR Response body:\n{}", body));
            tracing::error!("Catalog API request failed with {}: {}", status, body);
            return Err(backend_error(status.as_u16(), &body));
        }

        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                let error_msg = format!("Failed to read response body: {}", e);
                self.log_to_file(&error_msg);
                tracing::error!("{}", error_msg);
                return Err(ApiError::Transport(error_msg));
            }
        };

        let preview: String = body.chars().take(500).collect::<String>();
        let preview = if preview.len() < body.len() {
            format!("{}...", preview)
        } else {
            preview
        };
        self.log_to_file(&format!("=== RESPONSE BODY ===\n{}\n", preview));
        tracing::debug!("Catalog API response preview: {}", preview);

        match serde_json::from_str::<Value>(&body) {
            Ok(raw) => Ok(raw),
            Err(e) => {
                tracing::warn!("Response body is not JSON, treating as no data: {}", e);
                Ok(Value::Null)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> RestClient {
        RestClient::new(
            "http://localhost:3020/api/",
            SessionContext::new("catalog_dev", "admin"),
        )
    }

    #[test]
    fn url_carries_operation_then_session_params() {
        let mut params = QueryParams::new();
        params.set("ProcessType", "GetOne");
        params.set("SKUID", "SKU-1");

        let url = client().build_url("/products", &params);
        assert_eq!(
            url,
            "http://localhost:3020/api/products?ProcessType=GetOne&SKUID=SKU-1&DBServer=catalog_dev&LoggedUser=admin"
        );
    }

    #[test]
    fn session_params_present_even_without_operation_params() {
        let url = client().build_url("categories", &QueryParams::new());
        assert_eq!(
            url,
            "http://localhost:3020/api/categories?DBServer=catalog_dev&LoggedUser=admin"
        );
    }
}
