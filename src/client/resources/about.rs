//! Server information, no authentication required.

use crate::client::error::Result;
use crate::client::resources::Scope;
use crate::client::types::{AppInfo, AppStartupInfo, AppTheme};

#[derive(Debug, Clone, Copy)]
pub struct AboutApi<'a> {
    scope: Scope<'a>,
}

localized!(AboutApi);

impl AboutApi<'_> {
    /// Version and feature flags of the server.
    pub async fn info(&self) -> Result<AppInfo> {
        self.scope.get("/api/app/about").await
    }

    pub async fn startup_info(&self) -> Result<AppStartupInfo> {
        self.scope.get("/api/app/about/startup-info").await
    }

    pub async fn theme(&self) -> Result<AppTheme> {
        self.scope.get("/api/app/about/theme").await
    }
}
