use services::vapi::VapiClient;

pub mod modules;
pub mod services;

#[derive(Clone)]
pub struct AppState {
    pub vapi: VapiClient,
}
