//! Tag operations

use tracing::{debug, instrument};

use crate::repository::{GitRepo, Result};
use crate::types::TagInfo;
use ccgen_core::error::GitError;

impl GitRepo {
    /// Tag names ordered by reference name
    #[instrument(skip(self))]
    pub fn tag_names(&self) -> Result<Vec<String>> {
        let names = self.repo.tag_names(None)?;

        let mut names: Vec<String> = names.iter().flatten().map(str::to_string).collect();
        // Byte-wise, so `v1.10.0` sorts before `v1.9.0`.
        names.sort();

        debug!(count = names.len(), "listed all tags");
        Ok(names)
    }

    /// Last tag in reference-name order, peeled to its commit.
    ///
    /// Only this tag is resolved; other tags may point at any object.
    #[instrument(skip(self))]
    pub fn latest_tag(&self) -> Result<TagInfo> {
        let name = self
            .tag_names()?
            .pop()
            .ok_or_else(|| GitError::NoTags(self.path().to_path_buf()))?;

        let reference = self.repo.find_reference(&format!("refs/tags/{}", name))?;
        let commit = reference.peel_to_commit()?;
        let latest = TagInfo::new(name, commit.id().to_string());

        debug!(latest = %latest.name, commit = %latest.commit_hash, "found latest tag");
        Ok(latest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use git2::{Repository, Signature};
    use tempfile::TempDir;

    fn setup_repo() -> (TempDir, Repository) {
        let temp = TempDir::new().unwrap();
        let repo = Repository::init(temp.path()).unwrap();
        {
            let sig = Signature::now("Test", "test@example.com").unwrap();
            let tree_id = repo.index().unwrap().write_tree().unwrap();
            let tree = repo.find_tree(tree_id).unwrap();
            repo.commit(Some("HEAD"), &sig, &sig, "Initial commit", &tree, &[])
                .unwrap();
        }
        (temp, repo)
    }

    fn tag_head(repo: &Repository, name: &str) {
        let head = repo.head().unwrap().peel_to_commit().unwrap();
        repo.tag_lightweight(name, head.as_object(), false).unwrap();
    }

    #[test]
    fn test_list_tags() {
        let (temp, repo) = setup_repo();
        tag_head(&repo, "v1.0.0");

        let git_repo = GitRepo::open(temp.path()).unwrap();
        assert_eq!(git_repo.tag_names().unwrap(), vec!["v1.0.0"]);
    }

    #[test]
    fn test_latest_tag_uses_name_order() {
        let (temp, repo) = setup_repo();
        tag_head(&repo, "v1.9.0");
        tag_head(&repo, "v1.10.0");
        tag_head(&repo, "v1.2.0");

        let git_repo = GitRepo::open(temp.path()).unwrap();
        assert_eq!(git_repo.tag_names().unwrap(), vec!["v1.10.0", "v1.2.0", "v1.9.0"]);
        assert_eq!(git_repo.latest_tag().unwrap().name, "v1.9.0");
    }

    #[test]
    fn test_annotated_tag_peels_to_commit() {
        let (temp, repo) = setup_repo();
        let head = repo.head().unwrap().peel_to_commit().unwrap();
        let sig = Signature::now("Test", "test@example.com").unwrap();
        repo.tag("v2.0.0", head.as_object(), &sig, "Release 2.0", false)
            .unwrap();

        let git_repo = GitRepo::open(temp.path()).unwrap();
        let tag = git_repo.latest_tag().unwrap();
        assert_eq!(tag.commit_hash, head.id().to_string());
    }

    #[test]
    fn test_no_tags() {
        let (temp, _repo) = setup_repo();
        let git_repo = GitRepo::open(temp.path()).unwrap();
        assert!(matches!(git_repo.latest_tag(), Err(GitError::NoTags(_))));
    }

    #[test]
    fn test_tree_tag_does_not_block_latest_tag() {
        let (temp, repo) = setup_repo();
        tag_head(&repo, "v1.0.0");
        let tree = repo.head().unwrap().peel_to_tree().unwrap();
        repo.tag_lightweight("a-tree-tag", tree.as_object(), false)
            .unwrap();

        let git_repo = GitRepo::open(temp.path()).unwrap();
        let tag = git_repo.latest_tag().unwrap();
        assert_eq!(tag.name, "v1.0.0");
        assert!(git_repo.commits_since_latest_tag().unwrap().is_empty());
    }
}
