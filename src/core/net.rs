use crate::core::IexError;

/// Reads a response body as text after checking the status line.
///
/// Non-2xx responses become [`IexError::Status`] carrying the final URL.
pub(crate) async fn get_text(resp: reqwest::Response) -> Result<String, IexError> {
    let status = resp.status();
    #[cfg(feature = "tracing")]
    tracing::debug!(status = status.as_u16(), url = %resp.url(), "iex response");

    if !status.is_success() {
        return Err(IexError::Status {
            status: status.as_u16(),
            url: resp.url().to_string(),
        });
    }

    Ok(resp.text().await?)
}
