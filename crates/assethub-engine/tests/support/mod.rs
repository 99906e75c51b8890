//! Shared test support: an in-memory backend implementing every store
//! contract, plus fixture builders for folder trees.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use assethub_core::config::transfer::TransferConfig;
use assethub_core::error::AppError;
use assethub_core::result::AppResult;
use assethub_core::traits::{NoopBudget, NullProgress};
use assethub_entity::assetstore::{
    Assetstore, AssetstoreKind, AssetstoreStore, AssetstoreTransfer, MoveReceipt,
};
use assethub_entity::file::{File, FileStore, MoveFilter};
use assethub_entity::folder::{Folder, FolderStore};
use assethub_entity::item::Item;
use assethub_entity::job::{CreateJob, Job, JobStatus, JobStore, JobUpdate};
use assethub_entity::user::User;
use assethub_engine::MoveOrchestrator;

#[derive(Default)]
struct State {
    jobs: HashMap<Uuid, Job>,
    folders: HashMap<Uuid, Folder>,
    items: HashMap<Uuid, Item>,
    files: HashMap<Uuid, File>,
    assetstores: HashMap<Uuid, Assetstore>,
    moved: Vec<Uuid>,
}

/// In-memory implementation of every store the engine consumes.
///
/// The cancellation hooks simulate the external actor that flips a job
/// to `Canceled` concurrently with the traversal: `cancel_immediately`
/// affects every reload, `cancel_after_moves(n)` kicks in once `n`
/// files have been transferred.
#[derive(Default)]
pub struct MemoryHub {
    state: Mutex<State>,
    cancel_immediately: AtomicBool,
    cancel_after_moves: Mutex<Option<usize>>,
    fail_move_of: Mutex<Option<Uuid>>,
}

impl MemoryHub {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn cancel_immediately(&self) {
        self.cancel_immediately.store(true, Ordering::SeqCst);
    }

    pub fn cancel_after_moves(&self, count: usize) {
        *self.cancel_after_moves.lock().expect("lock") = Some(count);
    }

    pub fn fail_move_of(&self, file_id: Uuid) {
        *self.fail_move_of.lock().expect("lock") = Some(file_id);
    }

    pub fn add_user(&self, username: &str) -> User {
        User {
            id: Uuid::new_v4(),
            username: username.to_string(),
            is_admin: false,
            created_at: Utc::now(),
        }
    }

    pub fn add_assetstore(&self, name: &str) -> Assetstore {
        let store = Assetstore {
            id: Uuid::new_v4(),
            name: name.to_string(),
            kind: AssetstoreKind::Filesystem,
            root: format!("/srv/assetstores/{name}"),
            current: false,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        self.state
            .lock()
            .expect("lock")
            .assetstores
            .insert(store.id, store.clone());
        store
    }

    pub fn add_folder(&self, parent_id: Option<Uuid>, name: &str, creator: &User) -> Folder {
        let folder = Folder {
            id: Uuid::new_v4(),
            parent_id,
            name: name.to_string(),
            creator_id: creator.id,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        self.state
            .lock()
            .expect("lock")
            .folders
            .insert(folder.id, folder.clone());
        folder
    }

    pub fn add_metadata_item(&self, folder: &Folder) -> Item {
        self.insert_item(folder.id, &folder.name, true)
    }

    pub fn add_item(&self, folder: &Folder, name: &str) -> Item {
        self.insert_item(folder.id, name, false)
    }

    fn insert_item(&self, folder_id: Uuid, name: &str, is_metadata: bool) -> Item {
        let item = Item {
            id: Uuid::new_v4(),
            folder_id,
            name: name.to_string(),
            is_metadata,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        self.state
            .lock()
            .expect("lock")
            .items
            .insert(item.id, item.clone());
        item
    }

    pub fn add_attached_file(
        &self,
        attached_to: &Item,
        name: &str,
        assetstore: &Assetstore,
        imported: bool,
    ) -> File {
        self.insert_file(name, assetstore.id, None, Some(attached_to.id), imported)
    }

    pub fn add_owned_file(
        &self,
        item: &Item,
        name: &str,
        assetstore: &Assetstore,
        imported: bool,
    ) -> File {
        self.insert_file(name, assetstore.id, Some(item.id), None, imported)
    }

    fn insert_file(
        &self,
        name: &str,
        assetstore_id: Uuid,
        item_id: Option<Uuid>,
        attached_to_id: Option<Uuid>,
        imported: bool,
    ) -> File {
        let file = File {
            id: Uuid::new_v4(),
            name: name.to_string(),
            assetstore_id,
            item_id,
            attached_to_id,
            imported,
            size_bytes: 4096,
            storage_path: format!("aa/bb/{name}"),
            mime_type: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        self.state
            .lock()
            .expect("lock")
            .files
            .insert(file.id, file.clone());
        file
    }

    /// File ids in the order they were actually transferred.
    pub fn moved_order(&self) -> Vec<Uuid> {
        self.state.lock().expect("lock").moved.clone()
    }

    /// Fresh copy of a file record.
    pub fn file(&self, id: Uuid) -> File {
        self.state.lock().expect("lock").files[&id].clone()
    }

    /// The single job created by a move run.
    pub fn only_job(&self) -> Job {
        let state = self.state.lock().expect("lock");
        assert_eq!(state.jobs.len(), 1, "expected exactly one job");
        state.jobs.values().next().expect("job").clone()
    }
}

#[async_trait]
impl JobStore for MemoryHub {
    async fn create(&self, job: CreateJob) -> AppResult<Job> {
        let record = Job {
            id: Uuid::new_v4(),
            job_type: job.job_type,
            title: job.title,
            status: JobStatus::Inactive,
            payload: job.payload,
            log: Vec::new(),
            created_by: job.created_by,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        self.state
            .lock()
            .expect("lock")
            .jobs
            .insert(record.id, record.clone());
        Ok(record)
    }

    async fn reload(&self, id: Uuid) -> AppResult<Job> {
        let mut state = self.state.lock().expect("lock");
        let should_cancel = self.cancel_immediately.load(Ordering::SeqCst)
            || self
                .cancel_after_moves
                .lock()
                .expect("lock")
                .is_some_and(|n| state.moved.len() >= n);
        let job = state
            .jobs
            .get_mut(&id)
            .ok_or_else(|| AppError::not_found(format!("Job {id} not found")))?;
        if should_cancel {
            job.status = JobStatus::Canceled;
        }
        Ok(job.clone())
    }

    async fn update(&self, id: Uuid, update: JobUpdate) -> AppResult<Job> {
        let mut state = self.state.lock().expect("lock");
        let job = state
            .jobs
            .get_mut(&id)
            .ok_or_else(|| AppError::not_found(format!("Job {id} not found")))?;
        if let Some(line) = update.log {
            job.log.push(line);
        }
        if let Some(status) = update.status {
            job.status = status;
        }
        job.updated_at = Utc::now();
        Ok(job.clone())
    }
}

#[async_trait]
impl FolderStore for MemoryHub {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Folder>> {
        Ok(self.state.lock().expect("lock").folders.get(&id).cloned())
    }

    async fn metadata_item(&self, folder_id: Uuid) -> AppResult<Option<Item>> {
        Ok(self
            .state
            .lock()
            .expect("lock")
            .items
            .values()
            .find(|item| item.folder_id == folder_id && item.is_metadata)
            .cloned())
    }

    async fn child_folders(&self, folder_id: Uuid, _user: &User) -> AppResult<Vec<Folder>> {
        let mut children: Vec<Folder> = self
            .state
            .lock()
            .expect("lock")
            .folders
            .values()
            .filter(|folder| folder.parent_id == Some(folder_id))
            .cloned()
            .collect();
        children.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(children)
    }

    async fn child_items(&self, folder_id: Uuid, _filter: &MoveFilter) -> AppResult<Vec<Item>> {
        let mut items: Vec<Item> = self
            .state
            .lock()
            .expect("lock")
            .items
            .values()
            .filter(|item| item.folder_id == folder_id && !item.is_metadata)
            .cloned()
            .collect();
        items.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(items)
    }
}

#[async_trait]
impl FileStore for MemoryHub {
    async fn find_attached(
        &self,
        attached_to_id: Uuid,
        filter: &MoveFilter,
    ) -> AppResult<Vec<File>> {
        let mut files: Vec<File> = self
            .state
            .lock()
            .expect("lock")
            .files
            .values()
            .filter(|file| file.attached_to_id == Some(attached_to_id) && filter.matches(file))
            .cloned()
            .collect();
        files.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(files)
    }

    async fn find_owned(&self, item_id: Uuid, filter: &MoveFilter) -> AppResult<Vec<File>> {
        let mut files: Vec<File> = self
            .state
            .lock()
            .expect("lock")
            .files
            .values()
            .filter(|file| file.item_id == Some(item_id) && filter.matches(file))
            .cloned()
            .collect();
        files.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(files)
    }

    async fn reassign(
        &self,
        file_id: Uuid,
        assetstore_id: Uuid,
        storage_path: &str,
    ) -> AppResult<File> {
        let mut state = self.state.lock().expect("lock");
        let file = state
            .files
            .get_mut(&file_id)
            .ok_or_else(|| AppError::not_found(format!("File {file_id} not found")))?;
        file.assetstore_id = assetstore_id;
        file.storage_path = storage_path.to_string();
        file.updated_at = Utc::now();
        Ok(file.clone())
    }
}

#[async_trait]
impl AssetstoreStore for MemoryHub {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Assetstore>> {
        Ok(self
            .state
            .lock()
            .expect("lock")
            .assetstores
            .get(&id)
            .cloned())
    }

    async fn find_current(&self) -> AppResult<Option<Assetstore>> {
        Ok(self
            .state
            .lock()
            .expect("lock")
            .assetstores
            .values()
            .find(|store| store.current)
            .cloned())
    }
}

#[async_trait]
impl AssetstoreTransfer for MemoryHub {
    async fn move_file(
        &self,
        file: &File,
        _user: &User,
        target: &Assetstore,
    ) -> AppResult<MoveReceipt> {
        if *self.fail_move_of.lock().expect("lock") == Some(file.id) {
            return Err(AppError::transfer("disk full"));
        }
        let new_path = format!("{}/{}", target.root, file.name);
        let mut state = self.state.lock().expect("lock");
        let record = state
            .files
            .get_mut(&file.id)
            .ok_or_else(|| AppError::not_found(format!("File {} not found", file.id)))?;
        let source = record.assetstore_id;
        record.assetstore_id = target.id;
        record.storage_path = new_path.clone();
        record.updated_at = Utc::now();
        state.moved.push(file.id);
        Ok(MoveReceipt {
            file_id: file.id,
            file_name: file.name.clone(),
            source_assetstore_id: source,
            target_assetstore_id: target.id,
            bytes_moved: file.size_bytes,
            storage_path: new_path,
            moved_at: Utc::now(),
        })
    }
}

/// Wire an orchestrator over a hub with null progress and no-op budget.
pub fn orchestrator(hub: &Arc<MemoryHub>) -> MoveOrchestrator {
    MoveOrchestrator::new(
        hub.clone(),
        hub.clone(),
        hub.clone(),
        hub.clone(),
        Arc::new(NoopBudget),
        Arc::new(NullProgress),
        &TransferConfig::default(),
    )
}

/// A small tree with files spread across two assetstores.
///
/// Folder F's metadata item has attached files `f1` (assetstore X) and
/// `f2` (assetstore Y); child folder B has an item owning `f3`
/// (assetstore X, imported).
pub struct Scenario {
    pub user: User,
    pub store_x: Assetstore,
    pub store_y: Assetstore,
    pub folder_f: Folder,
    pub f1: File,
    pub f2: File,
    pub f3: File,
}

pub fn mixed_store_tree(hub: &MemoryHub) -> Scenario {
    let user = hub.add_user("mover");
    let store_x = hub.add_assetstore("x");
    let store_y = hub.add_assetstore("y");

    let folder_f = hub.add_folder(None, "F", &user);
    let f_meta = hub.add_metadata_item(&folder_f);
    let f1 = hub.add_attached_file(&f_meta, "f1", &store_x, false);
    let f2 = hub.add_attached_file(&f_meta, "f2", &store_y, false);

    let folder_b = hub.add_folder(Some(folder_f.id), "B", &user);
    hub.add_metadata_item(&folder_b);
    let b_item = hub.add_item(&folder_b, "b-item");
    let f3 = hub.add_owned_file(&b_item, "f3", &store_x, true);

    Scenario {
        user,
        store_x,
        store_y,
        folder_f,
        f1,
        f2,
        f3,
    }
}
