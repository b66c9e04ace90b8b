// src/presentation/http/state.rs
use crate::application::{error::ApplicationError, services::ServiceContext};
use crate::presentation::http::{error::PageError, views::ViewRenderer};
use std::sync::Arc;

#[derive(Clone)]
pub struct HttpState {
    pub services: Arc<ServiceContext>,
    pub views: Arc<ViewRenderer>,
}

impl HttpState {
    pub fn new(services: Arc<ServiceContext>, views: Arc<ViewRenderer>) -> Self {
        Self { services, views }
    }

    pub fn page_error(&self, err: ApplicationError) -> PageError {
        PageError::render(&self.views, err)
    }
}
