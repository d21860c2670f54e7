/// Source of the bearer credential attached to outgoing requests.
///
/// The engine only ever reads the token; storage and refresh belong to the implementor.
pub trait TokenProvider: Send + Sync {
    fn token(&self) -> Option<String>;
}

/// A fixed token, or none at all.
#[derive(Debug, Clone, Default)]
pub struct StaticToken(Option<String>);

impl StaticToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(Some(token.into()))
    }

    pub fn none() -> Self {
        Self(None)
    }
}

impl TokenProvider for StaticToken {
    fn token(&self) -> Option<String> {
        self.0.clone()
    }
}

/// Reads the token from an environment variable on every request, so a
/// rotated credential is picked up without restarting.
#[derive(Debug, Clone)]
pub struct EnvToken {
    var: String,
}

impl EnvToken {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl TokenProvider for EnvToken {
    fn token(&self) -> Option<String> {
        std::env::var(&self.var)
            .ok()
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
    }
}
