//! Composite extractors
//!
//! Fixed sequences of single-field extractors. The `?` operator gives the
//! required semantics for free: the first failing field aborts the whole
//! extraction and no partial tuple can be observed.

use crate::errors::ExtractResult;
use crate::extract::Extractor;
use crate::request::RequestInput;
use crate::rules::FieldRules;

impl<R: FieldRules> Extractor<R> {
    /// Owner, database, and optional commit from POST/PUT form data
    pub fn owner_database_commit_form(
        &self,
        req: &RequestInput,
    ) -> ExtractResult<(String, String, String)> {
        let owner = self.owner(req, false)?;
        let database = self.database(req, false)?;
        let commit = self.commit(req)?;
        Ok((owner, database, commit))
    }

    /// Username, database, and optional commit from POST/PUT form data
    pub fn username_database_commit_form(
        &self,
        req: &RequestInput,
    ) -> ExtractResult<(String, String, String)> {
        let username = self.username(req, false)?;
        let database = self.database(req, false)?;
        let commit = self.commit(req)?;
        Ok((username, database, commit))
    }

    /// Path-based owner and database, extended with the optional commit
    pub fn owner_database_commit(
        &self,
        req: &RequestInput,
        ignore_leading: usize,
    ) -> ExtractResult<(String, String, String)> {
        let (owner, database) = self.owner_database(req, ignore_leading)?;
        let commit = self.commit(req)?;
        Ok((owner, database, commit))
    }

    /// Path-based owner and database, extended with the optional table name
    pub fn owner_database_table(
        &self,
        req: &RequestInput,
        ignore_leading: usize,
    ) -> ExtractResult<(String, String, String)> {
        let (owner, database) = self.owner_database(req, ignore_leading)?;
        let table = self.table(req)?;
        Ok((owner, database, table))
    }

    /// Path-based owner and database, extended with the optional table name
    /// and commit
    pub fn owner_database_table_commit(
        &self,
        req: &RequestInput,
        ignore_leading: usize,
    ) -> ExtractResult<(String, String, String, String)> {
        let (owner, database) = self.owner_database(req, ignore_leading)?;
        let table = self.table(req)?;
        let commit = self.commit(req)?;
        Ok((owner, database, table, commit))
    }

    /// Username, folder, and database name from form data
    pub fn username_folder_database(
        &self,
        req: &RequestInput,
        allow_get: bool,
    ) -> ExtractResult<(String, String, String)> {
        let username = self.username(req, allow_get)?;
        let folder = self.folder(req, allow_get)?;
        let database = self.database(req, allow_get)?;
        Ok((username, folder, database))
    }
}
