//! Tree fingerprinting: relative path to content digest for every file in a tree

use crate::concurrency::CancelToken;
use crate::config::MergeSettings;
use crate::error::MergeError;
use crate::tree::hasher;
use crate::tree::walker::{Entry, Walker, WalkerConfig};
use crate::types::{Digest, FingerprintMap, TreeFingerprints};
use futures::stream::{self, StreamExt, TryStreamExt};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info, instrument};

/// Builds fingerprint maps for directory trees
///
/// In sequential mode every file is hashed on the calling thread. In
/// parallel mode the three trees of a merge are fingerprinted at once and
/// each tree hashes up to `workers` files concurrently. Both modes produce
/// identical maps.
#[derive(Debug, Clone)]
pub struct Fingerprinter {
    walker_config: WalkerConfig,
    parallel: bool,
    workers: usize,
    cancel: CancelToken,
}

impl Default for Fingerprinter {
    fn default() -> Self {
        Self {
            walker_config: WalkerConfig::default(),
            parallel: true,
            workers: default_workers(),
            cancel: CancelToken::new(),
        }
    }
}

/// Worker count matching the machine's available parallelism
pub fn default_workers() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(4)
}

impl Fingerprinter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a fingerprinter from loaded settings
    pub fn from_settings(settings: &MergeSettings) -> Self {
        Self::new()
            .with_walker_config(WalkerConfig {
                ignore_patterns: settings.ignore.clone(),
            })
            .with_parallel(settings.parallel)
            .with_workers(settings.workers)
    }

    pub fn with_walker_config(mut self, config: WalkerConfig) -> Self {
        self.walker_config = config;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Upper bound of concurrently hashed files per tree (minimum 1)
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers.max(1);
        self
    }

    pub fn with_cancel_token(mut self, cancel: CancelToken) -> Self {
        self.cancel = cancel;
        self
    }

    /// Fingerprint a single tree on the calling thread
    #[instrument(skip(self, root), fields(root = %root.display()))]
    pub fn fingerprint(&self, root: &Path) -> Result<FingerprintMap, MergeError> {
        let start = Instant::now();
        let files = self.walker(root).files()?;

        let mut map = FingerprintMap::new();
        for entry in files {
            self.cancel.check()?;
            if let Entry::File { path, key } = entry {
                let digest = hasher::hash_file(&path)?;
                map.insert(key, digest);
            }
        }

        info!(
            file_count = map.len(),
            duration_ms = start.elapsed().as_millis() as u64,
            "Fingerprinted tree"
        );
        Ok(map)
    }

    /// Fingerprint a single tree, hashing files on the blocking pool
    ///
    /// Must be polled from inside a tokio runtime.
    #[instrument(skip(self, root), fields(root = %root.display()))]
    pub async fn fingerprint_concurrent(&self, root: PathBuf) -> Result<FingerprintMap, MergeError> {
        let start = Instant::now();
        let walker = self.walker(&root);
        let files = tokio::task::spawn_blocking(move || walker.files()).await??;
        debug!(file_count = files.len(), "Walked tree");

        let cancel = self.cancel.clone();
        let pairs: Vec<(String, Digest)> = stream::iter(files.into_iter().filter_map(|e| match e {
            Entry::File { path, key } => Some((path, key)),
            Entry::Directory { .. } => None,
        }))
        .map(|(path, key)| {
            let cancel = cancel.clone();
            tokio::task::spawn_blocking(move || {
                cancel.check()?;
                let digest = hasher::hash_file(&path)?;
                Ok::<_, MergeError>((key, digest))
            })
        })
        .buffer_unordered(self.workers)
        .map(|joined| joined.map_err(MergeError::from).and_then(|r| r))
        .try_collect()
        .await?;

        let map: FingerprintMap = pairs.into_iter().collect();
        info!(
            file_count = map.len(),
            duration_ms = start.elapsed().as_millis() as u64,
            "Fingerprinted tree"
        );
        Ok(map)
    }

    /// Fingerprint one tree, concurrently when parallel mode is on
    pub fn fingerprint_tree(&self, root: &Path) -> Result<FingerprintMap, MergeError> {
        if !self.parallel {
            return self.fingerprint(root);
        }
        self.runtime()?
            .block_on(self.fingerprint_concurrent(root.to_path_buf()))
    }

    /// Fingerprint Base, A and B
    ///
    /// All three maps are complete before this returns; the first failure
    /// aborts the others.
    #[instrument(skip(self), fields(parallel = self.parallel, workers = self.workers))]
    pub fn fingerprint_trees(
        &self,
        base: &Path,
        a: &Path,
        b: &Path,
    ) -> Result<TreeFingerprints, MergeError> {
        if !self.parallel {
            return Ok(TreeFingerprints::new(
                self.fingerprint(base)?,
                self.fingerprint(a)?,
                self.fingerprint(b)?,
            ));
        }

        let (base_map, a_map, b_map) = self.runtime()?.block_on(async {
            futures::try_join!(
                self.fingerprint_concurrent(base.to_path_buf()),
                self.fingerprint_concurrent(a.to_path_buf()),
                self.fingerprint_concurrent(b.to_path_buf()),
            )
        })?;

        Ok(TreeFingerprints::new(base_map, a_map, b_map))
    }

    fn runtime(&self) -> Result<tokio::runtime::Runtime, MergeError> {
        tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
            .map_err(|e| MergeError::Worker(format!("Failed to create runtime: {}", e)))
    }

    fn walker(&self, root: &Path) -> Walker {
        Walker::with_config(root.to_path_buf(), self.walker_config.clone())
    }
}
