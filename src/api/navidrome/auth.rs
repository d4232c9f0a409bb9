// Session credentials, URL construction and request headers.
impl NavidromeClient {
    pub fn new(base_url: &str, credentials: SessionCredentials) -> Self {
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
            credentials,
        }
    }

    /// Logs in against the native API and returns a complete session.
    ///
    /// `client_unique_id` is kept so a browser that already has one does not
    /// show up as a new client.
    pub async fn sign_in(
        base_url: &str,
        username: &str,
        password: &str,
        client_unique_id: &str,
    ) -> Result<SessionCredentials> {
        if username.trim().is_empty() || password.is_empty() {
            return Err(ApiError::validation("Username and password are required"));
        }

        let mut credentials = SessionCredentials::from_password(username.trim(), password);
        if !client_unique_id.trim().is_empty() {
            credentials.client_unique_id = client_unique_id.trim().to_string();
        }
        let client = Self::new(base_url, credentials);
        let url = client.native_url("auth/login");
        debug!(username = %client.credentials.username, "POST auth/login");

        let response = HTTP_CLIENT
            .post(&url)
            .json(&LoginRequest {
                username: &client.credentials.username,
                password,
            })
            .send()
            .await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let reason = serde_json::from_str::<serde_json::Value>(&text)
                .ok()
                .and_then(|body| body.get("error")?.as_str().map(str::to_string))
                .filter(|m| !m.trim().is_empty());
            return Err(match reason {
                Some(message) => ApiError::Backend(message),
                None => ApiError::Status {
                    status: status.as_u16(),
                },
            });
        }

        let login: LoginResponse = serde_json::from_str(&text)?;
        let mut credentials = client.credentials;
        credentials.token = non_empty(login.token)
            .ok_or_else(|| ApiError::Backend("Login did not return a session token".to_string()))?;
        if let Some(name) = non_empty(login.username) {
            credentials.username = name;
        }
        if let (Some(token), Some(salt)) =
            (non_empty(login.subsonic_token), non_empty(login.subsonic_salt))
        {
            credentials.subsonic_token = token;
            credentials.subsonic_salt = salt;
        }
        credentials.is_admin = login.is_admin;

        // Deletes go through Subsonic, so its credentials must work too.
        Self::new(base_url, credentials.clone()).ping().await?;
        info!(username = %credentials.username, admin = credentials.is_admin, "signed in");
        Ok(credentials)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn credentials(&self) -> &SessionCredentials {
        &self.credentials
    }

    fn auth_params(&self) -> String {
        format!(
            "u={}&t={}&s={}&c={}&v={}&f=json",
            urlencoding::encode(&self.credentials.username),
            urlencoding::encode(&self.credentials.subsonic_token),
            urlencoding::encode(&self.credentials.subsonic_salt),
            CLIENT_NAME,
            API_VERSION
        )
    }

    fn build_url(&self, endpoint: &str, extra_params: &[(&str, &str)]) -> String {
        let mut url = format!("{}/rest/{}?{}", self.base_url, endpoint, self.auth_params());

        for (key, value) in extra_params {
            url.push_str(&format!("&{}={}", key, urlencoding::encode(value)));
        }

        url
    }

    fn build_url_owned(&self, endpoint: &str, extra_params: Vec<(String, String)>) -> String {
        let mut url = format!("{}/rest/{}?{}", self.base_url, endpoint, self.auth_params());

        for (key, value) in extra_params {
            url.push_str(&format!("&{}={}", key, urlencoding::encode(&value)));
        }

        url
    }

    fn native_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn with_session_headers(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        request
            .header(
                "X-ND-Authorization",
                format!("Bearer {}", self.credentials.token),
            )
            .header("X-ND-Client-Unique-Id", &self.credentials.client_unique_id)
    }

    /// Key under which a list response is cached, scoped to server and user.
    fn list_cache_key(&self, prefix: &str, params: &str) -> String {
        format!(
            "{}{}:{}:{}",
            prefix, self.base_url, self.credentials.username, params
        )
    }

    /// POSTs a JSON body to a Subsonic endpoint and unwraps the response envelope.
    ///
    /// Only a failure to reach the server is a `Transport` error. A non-2xx
    /// status or an unparsable body is reported as a backend failure.
    async fn post_subsonic<B>(&self, endpoint: &str, body: &B) -> Result<SubsonicEnvelope>
    where
        B: Serialize + ?Sized,
    {
        let url = self.build_url(endpoint, &[]);
        debug!(endpoint, "POST subsonic");

        let response = self
            .with_session_headers(HTTP_CLIENT.post(&url))
            .json(body)
            .send()
            .await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            if let Ok(envelope) = SubsonicEnvelope::parse(&text) {
                if let Some(error) = envelope.error.filter(|e| !e.message.trim().is_empty()) {
                    return Err(ApiError::Backend(error.message));
                }
            }
            return Err(ApiError::Status {
                status: status.as_u16(),
            });
        }

        SubsonicEnvelope::parse(&text)
    }

    async fn get_subsonic(
        &self,
        endpoint: &str,
        params: Vec<(String, String)>,
    ) -> Result<SubsonicEnvelope> {
        let url = self.build_url_owned(endpoint, params);
        debug!(endpoint, "GET subsonic");

        let response = self.with_session_headers(HTTP_CLIENT.get(&url)).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
            });
        }
        let text = response.text().await?;
        SubsonicEnvelope::parse(&text)?.ensure_ok()
    }

    async fn put_native<B>(&self, path: &str, body: &B) -> Result<TagUpdateResponse>
    where
        B: Serialize + ?Sized,
    {
        let url = self.native_url(path);
        debug!(path, "PUT native");

        let response = self
            .with_session_headers(HTTP_CLIENT.put(&url))
            .json(body)
            .send()
            .await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let detail = text.trim();
            return Err(if detail.is_empty() {
                ApiError::Status {
                    status: status.as_u16(),
                }
            } else {
                ApiError::Backend(detail.to_string())
            });
        }

        Ok(serde_json::from_str(&text)?)
    }
}
