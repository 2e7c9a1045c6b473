use crate::models::{Claims, ServiceError, User, UserRole};
use actix_web::http::header;
use actix_web::{HttpMessage, HttpRequest};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use std::env;

pub mod attachments;
pub mod catalog;
pub mod seed_data;

pub use auth_middleware::Authentication;

// JWT utility functions
pub mod jwt {
    use super::*;

    // Get JWT secret from environment or use default
    fn get_jwt_secret() -> String {
        env::var("JWT_SECRET").unwrap_or_else(|_| "crsp_super_secret_key".to_string())
    }

    // Generate a new JWT token carrying the session user
    pub fn generate_token(user: &User) -> Result<String, ServiceError> {
        let secret = get_jwt_secret();
        let expiration = Utc::now()
            .checked_add_signed(Duration::days(7))
            .expect("Valid timestamp")
            .timestamp() as usize;

        let claims = Claims {
            sub: user.id.clone(),
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role,
            exp: expiration,
            iat: Utc::now().timestamp() as usize,
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret.as_ref()),
        )
            .map_err(|_| ServiceError::InternalServerError)
    }

    // Validate and decode a JWT token
    pub fn decode_token(token: &str) -> Result<Claims, ServiceError> {
        let secret = get_jwt_secret();

        decode::<Claims>(
            token,
            &DecodingKey::from_secret(secret.as_ref()),
            &Validation::default(),
        )
            .map(|data| data.claims)
            .map_err(|_| ServiceError::Unauthorized)
    }

    // Extract JWT from Authorization header
    pub fn extract_token_from_header(auth_header: &str) -> Result<String, ServiceError> {
        if !auth_header.starts_with("Bearer ") {
            return Err(ServiceError::Unauthorized);
        }

        Ok(auth_header.trim_start_matches("Bearer ").to_string())
    }
}

// Session and capability handling
pub mod session {
    use super::*;

    // The fixed synthetic identity every simulated login receives
    const SESSION_USER_ID: &str = "123";
    const SESSION_USER_NAME: &str = "Utilisateur Test";
    const SESSION_USER_EMAIL: &str = "user@una.bj";

    // Explicit session value: either anonymous or holding the simulated user.
    // Handlers receive one per request instead of consulting global state.
    #[derive(Clone, Debug, Default)]
    pub struct Session {
        user: Option<User>,
    }

    impl Session {
        pub fn anonymous() -> Self {
            Self { user: None }
        }

        // Open a session with the chosen role, replacing any existing one
        pub fn login(&mut self, role: UserRole) -> User {
            let user = User {
                id: SESSION_USER_ID.to_string(),
                name: SESSION_USER_NAME.to_string(),
                email: SESSION_USER_EMAIL.to_string(),
                role,
            };
            self.user = Some(user.clone());
            user
        }

        pub fn logout(&mut self) {
            self.user = None;
        }

        pub fn user(&self) -> Option<&User> {
            self.user.as_ref()
        }

        pub fn is_authenticated(&self) -> bool {
            self.user.is_some()
        }

        // Only moderators and administrators may change the collections
        pub fn can_mutate(&self) -> bool {
            matches!(
                self.user.as_ref().map(|user| user.role),
                Some(UserRole::Moderator) | Some(UserRole::Admin)
            )
        }

        // Rebuild the session carried by a decoded token
        pub fn from_claims(claims: &Claims) -> Self {
            Self {
                user: Some(User {
                    id: claims.sub.clone(),
                    name: claims.name.clone(),
                    email: claims.email.clone(),
                    role: claims.role,
                }),
            }
        }
    }
}

pub use session::Session;

// Build the session for the current request from the claims the middleware
// attached; requests without a valid token get an anonymous session
pub fn session_from_request(req: &HttpRequest) -> Session {
    match req.extensions().get::<Claims>() {
        Some(claims) => Session::from_claims(claims),
        None => Session::anonymous(),
    }
}

// Middleware that decodes the bearer token when one is present. Viewing is
// public, so requests without a token pass through as anonymous instead of
// being rejected.
pub mod auth_middleware {
    use super::*;
    use actix_web::dev::{forward_ready, Service, ServiceRequest, Transform};
    use actix_web::Error;
    use futures::future::{ok, Ready};
    use std::future::Future;
    use std::pin::Pin;

    pub struct Authentication;

    impl<S, B> Transform<S, ServiceRequest> for Authentication
    where
        S: Service<ServiceRequest, Response = actix_web::dev::ServiceResponse<B>, Error = Error>,
        S::Future: 'static,
        B: 'static,
    {
        type Response = actix_web::dev::ServiceResponse<B>;
        type Error = Error;
        type Transform = AuthenticationMiddleware<S>;
        type InitError = ();
        type Future = Ready<Result<Self::Transform, Self::InitError>>;

        fn new_transform(&self, service: S) -> Self::Future {
            ok(AuthenticationMiddleware { service })
        }
    }

    pub struct AuthenticationMiddleware<S> {
        service: S,
    }

    impl<S, B> Service<ServiceRequest> for AuthenticationMiddleware<S>
    where
        S: Service<ServiceRequest, Response = actix_web::dev::ServiceResponse<B>, Error = Error>,
        S::Future: 'static,
        B: 'static,
    {
        type Response = actix_web::dev::ServiceResponse<B>;
        type Error = Error;
        type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

        forward_ready!(service);

        fn call(&self, req: ServiceRequest) -> Self::Future {
            // Get Authorization header
            let auth_header = req.headers().get(header::AUTHORIZATION);

            if let Some(auth_header) = auth_header {
                if let Ok(auth_str) = auth_header.to_str() {
                    if let Ok(token) = jwt::extract_token_from_header(auth_str) {
                        if let Ok(claims) = jwt::decode_token(&token) {
                            // Add the claims to the request extensions
                            req.extensions_mut().insert(claims);
                        }
                    }
                }
            }

            let fut = self.service.call(req);
            Box::pin(async move {
                fut.await
            })
        }
    }
}
