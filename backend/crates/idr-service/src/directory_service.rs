//! Request-level operations on the directory.
//!
//! Validates input, digests passwords and turns store results into
//! caller-facing outcomes. All state lives in the [`RecordStore`].

use crate::validation::{validate_login_name, validate_password, validate_real_name};
use crate::{CallerContext, InfoResponse, Metrics, Result as ServiceErrorResult, ServiceError};

use idr_config::ValidationConfig;
use idr_core::{CoreError, InfoKind, PasswordDigest, RecordSummary, Sha512Digest};
use idr_store::{RecordStore, StoreError};

use std::future::Future;
use std::panic::Location;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Instant;

use error_location::ErrorLocation;
use log::debug;
use uuid::Uuid;

#[derive(Clone)]
pub struct DirectoryService {
    store: RecordStore,
    digest: Arc<dyn PasswordDigest>,
    limits: ValidationConfig,
    metrics: Metrics,
}

impl DirectoryService {
    /// Service over `store` using SHA-512 password digests
    pub fn new(store: RecordStore, limits: ValidationConfig) -> Self {
        Self::with_digest(store, Arc::new(Sha512Digest), limits)
    }

    pub fn with_digest(
        store: RecordStore,
        digest: Arc<dyn PasswordDigest>,
        limits: ValidationConfig,
    ) -> Self {
        Self {
            store,
            digest,
            limits,
            metrics: Metrics::new(),
        }
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Register a new login.
    ///
    /// Without a real name the caller's local account name is used, and
    /// failing that the login name itself.
    pub async fn create(
        &self,
        caller: &CallerContext,
        login_name: &str,
        real_name: Option<&str>,
        password: Option<&str>,
    ) -> ServiceErrorResult<RecordSummary> {
        self.observe(
            "create",
            self.create_record(caller, login_name, real_name, password),
        )
        .await
    }

    pub async fn lookup_by_name(&self, login_name: &str) -> ServiceErrorResult<RecordSummary> {
        self.observe("lookup", self.find_by_name(login_name)).await
    }

    /// Look up by the textual form of an id
    pub async fn lookup_by_id(&self, id: &str) -> ServiceErrorResult<RecordSummary> {
        self.observe("reverse_lookup", self.find_by_id_text(id))
            .await
    }

    pub async fn lookup_by_uuid(&self, id: Uuid) -> ServiceErrorResult<RecordSummary> {
        self.observe("reverse_lookup", self.find_by_id(id)).await
    }

    /// Rename a login, returning the new name
    pub async fn rename(
        &self,
        old_name: &str,
        new_name: &str,
        password: Option<&str>,
    ) -> ServiceErrorResult<String> {
        self.observe("rename", self.rename_record(old_name, new_name, password))
            .await
    }

    /// Remove a login, returning the removed name
    pub async fn delete(
        &self,
        login_name: &str,
        password: Option<&str>,
    ) -> ServiceErrorResult<String> {
        self.observe("delete", self.delete_record(login_name, password))
            .await
    }

    /// `kind` is one of `users`, `ids` (or `uuids`) and `all`, any case
    pub async fn get_info(&self, kind: &str) -> ServiceErrorResult<InfoResponse> {
        self.observe("info", async {
            let kind = InfoKind::from_str(kind)?;
            self.list(kind).await
        })
        .await
    }

    async fn create_record(
        &self,
        caller: &CallerContext,
        login_name: &str,
        real_name: Option<&str>,
        password: Option<&str>,
    ) -> ServiceErrorResult<RecordSummary> {
        validate_login_name(login_name, "login_name", self.limits.max_login_name_length)?;
        validate_password(password)?;

        let real_name = real_name
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .or(caller.local_user.as_deref())
            .unwrap_or(login_name);
        validate_real_name(real_name, self.limits.max_real_name_length)?;

        let digest = self.digest_of(password);
        let record = self
            .store
            .create(login_name, real_name, digest, &caller.client_origin)
            .await?;

        self.metrics.records(self.store.len().await);
        Ok(record.summary())
    }

    async fn find_by_name(&self, login_name: &str) -> ServiceErrorResult<RecordSummary> {
        let record = self.store.find_by_name(login_name).await?;
        Ok(record.summary())
    }

    async fn find_by_id_text(&self, id: &str) -> ServiceErrorResult<RecordSummary> {
        let id = Uuid::from_str(id.trim()).map_err(|source| CoreError::Uuid {
            source,
            location: ErrorLocation::from(Location::caller()),
        })?;
        self.find_by_id(id).await
    }

    async fn find_by_id(&self, id: Uuid) -> ServiceErrorResult<RecordSummary> {
        match self.store.find_by_id(id).await {
            Ok(record) => Ok(record.summary()),
            Err(StoreError::NotFound { location, .. }) => Err(ServiceError::NotFound {
                message: format!("No login with id {id}"),
                location,
            }),
            Err(e) => Err(e.into()),
        }
    }

    async fn rename_record(
        &self,
        old_name: &str,
        new_name: &str,
        password: Option<&str>,
    ) -> ServiceErrorResult<String> {
        if old_name.trim().is_empty() {
            return Err(ServiceError::validation(
                "login_name cannot be empty",
                Some("login_name"),
            ));
        }
        validate_login_name(
            new_name,
            "new_login_name",
            self.limits.max_login_name_length,
        )?;
        if old_name == new_name {
            return Err(ServiceError::validation(
                "new_login_name must differ from the current name",
                Some("new_login_name"),
            ));
        }
        validate_password(password)?;

        let digest = self.digest_of(password);
        let renamed = self
            .store
            .rename(old_name, new_name, digest.as_deref())
            .await?;
        Ok(renamed)
    }

    async fn delete_record(
        &self,
        login_name: &str,
        password: Option<&str>,
    ) -> ServiceErrorResult<String> {
        if login_name.trim().is_empty() {
            return Err(ServiceError::validation(
                "login_name cannot be empty",
                Some("login_name"),
            ));
        }
        validate_password(password)?;

        let digest = self.digest_of(password);
        let removed = self.store.delete(login_name, digest.as_deref()).await?;

        self.metrics.records(self.store.len().await);
        Ok(removed.login_name)
    }

    async fn list(&self, kind: InfoKind) -> ServiceErrorResult<InfoResponse> {
        let response = match kind {
            InfoKind::Users => InfoResponse::Users {
                users: self.store.list_names().await,
            },
            InfoKind::Ids => InfoResponse::Ids {
                ids: self.store.list_ids().await,
            },
            InfoKind::All => InfoResponse::All {
                logins: self.store.list_all().await,
            },
        };
        Ok(response)
    }

    fn digest_of(&self, password: Option<&str>) -> Option<String> {
        password.map(|plaintext| self.digest.digest(plaintext))
    }

    async fn observe<T, F>(&self, operation: &'static str, work: F) -> ServiceErrorResult<T>
    where
        F: Future<Output = ServiceErrorResult<T>>,
    {
        let started = Instant::now();
        self.metrics.request_received(operation);

        let result = work.await;

        self.metrics.request_latency(operation, started.elapsed());
        if let Err(e) = &result {
            self.metrics.request_failed(operation, e.error_code());
            debug!("{} failed: {} {}", operation, e, e.location());
        }

        result
    }
}
