//! Throwaway git repositories for tests.

use std::fs;
use std::path::{Path, PathBuf};

use git2::build::CheckoutBuilder;
use git2::{IndexAddOption, Repository, RepositoryInitOptions, Signature};
use tempfile::TempDir;

/// A git repository in a temp directory, starting on `master`
pub struct TestRepo {
    dir: TempDir,
    repo: Repository,
}

impl TestRepo {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let mut opts = RepositoryInitOptions::new();
        opts.initial_head("master");
        let repo = Repository::init_opts(dir.path(), &opts).unwrap();
        Self { dir, repo }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn file(&self, rel: &str) -> PathBuf {
        self.dir.path().join(rel)
    }

    /// Write a file, creating parent directories
    pub fn write(&self, rel: &str, content: &str) -> &Self {
        let path = self.file(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
        self
    }

    /// Add a service directory whose build output is `content`
    pub fn service(&self, name: &str, content: &str) -> &Self {
        self.write(&format!("services/{}/main.txt", name), content)
    }

    /// Remove a file or directory
    pub fn remove(&self, rel: &str) -> &Self {
        let path = self.file(rel);
        if path.is_dir() {
            fs::remove_dir_all(path).unwrap();
        } else {
            fs::remove_file(path).unwrap();
        }
        self
    }

    /// Stage everything (including removals) and commit on HEAD
    pub fn commit(&self, message: &str) -> git2::Oid {
        let mut index = self.repo.index().unwrap();
        index
            .add_all(["*"], IndexAddOption::DEFAULT, None)
            .unwrap();
        index.update_all(["*"], None).unwrap();
        index.write().unwrap();
        let tree_id = index.write_tree().unwrap();
        let tree = self.repo.find_tree(tree_id).unwrap();

        let sig = Signature::now("Test", "test@example.com").unwrap();
        let parent = self
            .repo
            .head()
            .ok()
            .and_then(|h| h.peel_to_commit().ok());
        let parents: Vec<&git2::Commit> = parent.iter().collect();

        self.repo
            .commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
            .unwrap()
    }

    /// Create `name` at the current commit and make it HEAD
    pub fn branch(&self, name: &str) -> &Self {
        let head = self.repo.head().unwrap().peel_to_commit().unwrap();
        self.repo.branch(name, &head, false).unwrap();
        self.repo
            .set_head(&format!("refs/heads/{}", name))
            .unwrap();
        self
    }

    /// Create a lightweight tag at the current commit
    pub fn tag(&self, name: &str) -> &Self {
        let head = self.repo.head().unwrap().peel(git2::ObjectType::Commit).unwrap();
        self.repo.tag_lightweight(name, &head, false).unwrap();
        self
    }

    /// Switch HEAD and the working tree to an existing branch
    pub fn switch(&self, name: &str) -> &Self {
        let refname = format!("refs/heads/{}", name);
        let target = self
            .repo
            .find_reference(&refname)
            .unwrap()
            .peel(git2::ObjectType::Commit)
            .unwrap();
        // tree first, so files tracked only on the old HEAD are removed
        self.repo
            .checkout_tree(&target, Some(CheckoutBuilder::new().force()))
            .unwrap();
        self.repo.set_head(&refname).unwrap();
        self
    }
}

/// Repository with two services on master and a `feature` branch that
/// deletes service-1 and adds service-3. The working tree is left on master.
pub fn removed_and_new() -> TestRepo {
    let repo = TestRepo::new();
    repo.service("service-1", "one").service("service-2", "two");
    repo.commit("initial");

    repo.branch("feature");
    repo.remove("services/service-1").service("service-3", "three");
    repo.commit("replace service-1 with service-3");

    repo.switch("master");
    repo
}

/// Repository where `feature` changes the build output of service-2.
pub fn modified() -> TestRepo {
    let repo = TestRepo::new();
    repo.service("service-1", "one").service("service-2", "two");
    repo.commit("initial");

    repo.branch("feature");
    repo.service("service-2", "two, but faster");
    repo.commit("tune service-2");

    repo.switch("master");
    repo
}
