use cors_gate::{
    AllowedHeaders, AllowedMethods, AllowedOrigins, Engine, ExposedHeaders, Policy, PolicyStore,
    RequestDescriptor,
};

#[derive(Default)]
pub struct PolicyBuilder {
    origins: Option<AllowedOrigins>,
    methods: Option<AllowedMethods>,
    allowed_headers: Option<AllowedHeaders>,
    exposed_headers: Option<ExposedHeaders>,
    credentials: Option<bool>,
    max_age: Option<u32>,
}

impl PolicyBuilder {
    pub fn origins(mut self, origins: AllowedOrigins) -> Self {
        self.origins = Some(origins);
        self
    }

    pub fn methods<I, S>(mut self, methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.methods = Some(AllowedMethods::list(methods));
        self
    }

    pub fn allowed_headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_headers = Some(AllowedHeaders::list(headers));
        self
    }

    pub fn exposed_headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exposed_headers = Some(ExposedHeaders::list(headers));
        self
    }

    pub fn credentials(mut self, enabled: bool) -> Self {
        self.credentials = Some(enabled);
        self
    }

    pub fn max_age(mut self, seconds: u32) -> Self {
        self.max_age = Some(seconds);
        self
    }

    pub fn build(self) -> Policy {
        let defaults = Policy::default();
        Policy {
            allowed_origins: self.origins.unwrap_or(defaults.allowed_origins),
            allowed_methods: self.methods.unwrap_or(defaults.allowed_methods),
            allowed_headers: self.allowed_headers.unwrap_or(defaults.allowed_headers),
            exposed_headers: self.exposed_headers.unwrap_or(defaults.exposed_headers),
            allow_credentials: self.credentials.unwrap_or(defaults.allow_credentials),
            max_age_seconds: self.max_age.or(defaults.max_age_seconds),
        }
    }

    pub fn build_engine(self) -> Engine {
        engine(self.build())
    }
}

pub fn policy() -> PolicyBuilder {
    PolicyBuilder::default()
}

pub fn engine(policy: Policy) -> Engine {
    Engine::new(PolicyStore::new(policy).expect("valid policy"))
}

pub fn simple_request(method: &str, origin: &str) -> RequestDescriptor {
    RequestDescriptor::new(method).header("Origin", origin)
}

pub fn preflight_request(origin: &str, method: &str, headers: &str) -> RequestDescriptor {
    let request = RequestDescriptor::new("OPTIONS")
        .header("Origin", origin)
        .header("Access-Control-Request-Method", method);
    if headers.is_empty() {
        request
    } else {
        request.header("Access-Control-Request-Headers", headers)
    }
}
