//! Building a filesystem from a JSON manifest.
//!
//! A manifest node is either `{ "name", "children": { .. } }` or
//! `{ "name", "blob": "data:<mime>;base64,<payload>" }`. Names go through
//! [`Environment::interpolate`], so `$USER` in the default manifest becomes
//! the session user's home directory.

use anyhow::{Context, anyhow};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use indexmap::IndexMap;
use serde::Deserialize;

use super::{Blob, FsNode, NodeId, VirtualFileSystem};
use crate::env::Environment;
use crate::error::ShellResult;

/// Manifest for a fresh session: `/apps/README.md`, `/home/$USER`, and
/// `/tmp/test.txt`.
pub const DEFAULT_SEED: &str = include_str!("seed.json");

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SeedNode {
    Directory {
        name: String,
        children: IndexMap<String, SeedNode>,
    },
    File {
        name: String,
        blob: String,
    },
}

/// Decode a `data:` URL into a [`Blob`].
///
/// A missing media type defaults to `text/plain`. Payloads without the
/// `;base64` marker are taken verbatim.
pub fn parse_data_url(url: &str) -> anyhow::Result<Blob> {
    let rest = url
        .strip_prefix("data:")
        .ok_or_else(|| anyhow!("not a data URL: {url}"))?;
    let (header, payload) = rest
        .split_once(',')
        .ok_or_else(|| anyhow!("data URL has no payload: {url}"))?;

    match header.strip_suffix(";base64") {
        Some(media_type) => {
            let data = STANDARD
                .decode(payload)
                .with_context(|| format!("invalid base64 payload ({media_type})"))?;
            Ok(Blob::new(media_type_or_default(media_type), data))
        }
        None => Ok(Blob::new(
            media_type_or_default(header),
            payload.as_bytes().to_vec(),
        )),
    }
}

fn media_type_or_default(media_type: &str) -> &str {
    if media_type.is_empty() {
        "text/plain"
    } else {
        media_type
    }
}

impl VirtualFileSystem {
    /// Build a filesystem from a JSON manifest whose root is a directory.
    pub fn from_seed(json: &str, env: &Environment) -> ShellResult<Self> {
        let root: SeedNode =
            serde_json::from_str(json).context("malformed filesystem manifest")?;
        let SeedNode::Directory { children, .. } = root else {
            return Err(anyhow!("filesystem manifest root must be a directory").into());
        };

        let mut fs = Self::new();
        let root = fs.root();
        fs.graft(root, children, env)?;
        Ok(fs)
    }

    /// The default session filesystem.
    pub fn seeded(env: &Environment) -> ShellResult<Self> {
        Self::from_seed(DEFAULT_SEED, env)
    }

    fn graft(
        &mut self,
        parent: NodeId,
        children: IndexMap<String, SeedNode>,
        env: &Environment,
    ) -> ShellResult<()> {
        for child in children.into_values() {
            match child {
                SeedNode::Directory { name, children } => {
                    let id = self.put(parent, FsNode::directory(env.interpolate(&name)))?;
                    self.graft(id, children, env)?;
                }
                SeedNode::File { name, blob } => {
                    let blob = parse_data_url(&blob)?;
                    self.put(parent, FsNode::file(env.interpolate(&name), blob))?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{CWD, USER};
    use crate::error::ShellError;

    fn env_for(user: &str) -> Environment {
        let mut env = Environment::new();
        env.put(CWD, "/").unwrap();
        env.put(USER, user).unwrap();
        env
    }

    #[test]
    fn default_seed_layout() {
        let env = env_for("spud");
        let fs = VirtualFileSystem::seeded(&env).unwrap();

        let top: Vec<_> = fs
            .list(&env, "/")
            .unwrap()
            .into_iter()
            .map(|id| fs.name(id).to_string())
            .collect();
        assert_eq!(top, vec!["apps", "home", "tmp"]);

        let home = fs.get(&env, "/home/spud").unwrap();
        assert!(fs[home].is_dir());

        let readme = fs.get(&env, "/apps/README.md").unwrap();
        assert!(fs[readme].blob().unwrap().text().contains("PotatOS"));
    }

    #[test]
    fn seed_file_is_decoded() {
        let env = env_for("spud");
        let fs = VirtualFileSystem::seeded(&env).unwrap();
        let test = fs.get(&env, "/tmp/test.txt").unwrap();
        let blob = fs[test].blob().unwrap();
        assert_eq!(blob.media_type, "text/plain");
        assert_eq!(blob.text(), "hello!");
    }

    #[test]
    fn home_follows_user() {
        let env = env_for("sprout");
        let fs = VirtualFileSystem::seeded(&env).unwrap();
        assert!(fs.get(&env, "/home/sprout").is_ok());
        assert!(fs.get(&env, "/home/spud").is_err());
    }

    #[test]
    fn data_url_variants() {
        let blob = parse_data_url("data:text/html;base64,PHA+").unwrap();
        assert_eq!(blob.media_type, "text/html");
        assert_eq!(blob.text(), "<p>");

        let blob = parse_data_url("data:,plain words").unwrap();
        assert_eq!(blob.media_type, "text/plain");
        assert_eq!(blob.text(), "plain words");

        assert!(parse_data_url("http://example.com").is_err());
        assert!(parse_data_url("data:text/plain;base64").is_err());
        assert!(parse_data_url("data:text/plain;base64,***").is_err());
    }

    #[test]
    fn malformed_manifest_is_an_error() {
        let env = env_for("spud");
        let err = VirtualFileSystem::from_seed("{", &env).unwrap_err();
        assert!(matches!(err, ShellError::Command(_)));
    }

    #[test]
    fn file_root_is_rejected() {
        let env = env_for("spud");
        let json = r#"{ "name": "", "blob": "data:,x" }"#;
        let err = VirtualFileSystem::from_seed(json, &env).unwrap_err();
        assert!(err.to_string().contains("must be a directory"));
    }
}
