// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    Certification, CertificationMap, NewCertification, NewToy, ProfileUpdate, ScoredToy, Toy,
    ToyFilter, User, UserAccount,
};
pub use requests::{LoginRequest, SignupRequest, ToyListQuery};
pub use responses::{ErrorResponse, HealthResponse, TokenResponse};
