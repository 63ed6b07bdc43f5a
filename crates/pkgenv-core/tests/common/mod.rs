#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use pkgenv_core::{ProjectLayout, UniqueId};
use serde_json::{Value, json};
use tempfile::TempDir;

pub const SOLUTION_ID: &str = "7E60EE1A-512E-4E2B-88B2-EF61103936F8";
pub const SOLUTION_NAME: &str = "spfxbuild-client-side-solution";
pub const CDN: &str = "https://tenant.sharepoint.com/cdn";
pub const WEB_PART: &str = "./src/webparts/buildWp/BuildWpWebPart.manifest.json";
pub const WEB_PART_ID: &str = "9fddb786-2717-43f0-8455-865a3a837cf0";
pub const EXTENSION: &str = "./src/extensions/banner/BannerApplicationCustomizer.manifest.json";
pub const EXTENSION_ID: &str = "5a1c7c3e-2f7d-4e6b-9f56-3d8c1e0b7a42";

/// A throwaway SPFx-shaped project on disk.
pub struct Fixture {
    pub dir: TempDir,
    pub layout: ProjectLayout,
    components: Vec<(String, String)>,
}

impl Fixture {
    /// Project with one web part and one extension, no settings file.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("tmpdir");
        let layout = ProjectLayout::new(dir.path());
        let mut fixture = Self {
            dir,
            layout,
            components: Vec::new(),
        };
        fixture.write(
            "config/package-solution.json",
            &json!({
                "$schema": "https://developer.microsoft.com/json-schemas/spfx-build/package-solution.schema.json",
                "solution": {
                    "name": SOLUTION_NAME,
                    "id": SOLUTION_ID,
                    "version": "1.0.0.0",
                    "includeClientSideAssets": true
                },
                "paths": { "zippedPackage": "solution/spfxbuild.sppkg" }
            }),
        );
        fixture.write(
            "config/write-manifests.json",
            &json!({
                "$schema": "https://developer.microsoft.com/json-schemas/spfx-build/write-manifests.schema.json",
                "cdnBasePath": CDN
            }),
        );
        fixture.add_component("build-wp-web-part", WEB_PART, WEB_PART_ID);
        fixture.add_component("banner-application-customizer", EXTENSION, EXTENSION_ID);
        fixture
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn path(&self, rel: &str) -> PathBuf {
        self.root().join(rel)
    }

    pub fn write(&self, rel: &str, value: &Value) {
        self.write_text(rel, &serde_json::to_string_pretty(value).unwrap());
    }

    pub fn write_text(&self, rel: &str, text: &str) {
        let path = self.path(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, text).unwrap();
    }

    pub fn read(&self, rel: &str) -> Value {
        serde_json::from_str(&self.read_text(rel)).unwrap()
    }

    pub fn read_text(&self, rel: &str) -> String {
        fs::read_to_string(self.path(rel)).unwrap()
    }

    /// Declare a component in `config/config.json` and create its manifest
    /// (with a comment, as the SPFx generator writes them).
    pub fn add_component(&mut self, bundle: &str, manifest: &str, id: &str) {
        self.write_text(
            manifest,
            &format!(
                "{{\n  \"$schema\": \"https://developer.microsoft.com/json-schemas/spfx/client-side-component-manifest.schema.json\",\n  // Component id\n  \"id\": \"{id}\",\n  \"alias\": \"{bundle}\",\n  \"version\": \"*\"\n}}\n"
            ),
        );
        self.components.push((bundle.to_string(), manifest.to_string()));
        self.write_build_config();
    }

    fn write_build_config(&self) {
        let mut bundles = serde_json::Map::new();
        for (bundle, manifest) in &self.components {
            bundles.insert(
                bundle.clone(),
                json!({
                    "components": [{
                        "entrypoint": "./lib/index.js",
                        "manifest": manifest
                    }]
                }),
            );
        }
        self.write(
            "config/config.json",
            &json!({
                "$schema": "https://developer.microsoft.com/json-schemas/spfx-build/config.2.0.schema.json",
                "version": "2.0",
                "bundles": bundles,
                "localizedResources": {}
            }),
        );
    }

    pub fn manifest_id(&self, manifest: &str) -> String {
        let text = self.read_text(manifest);
        let cleaned: String = text
            .lines()
            .filter(|l| !l.trim_start().starts_with("//"))
            .collect::<Vec<_>>()
            .join("\n");
        let value: Value = serde_json::from_str(&cleaned).unwrap();
        value["id"].as_str().unwrap().to_string()
    }

    pub fn settings(&self) -> Value {
        self.read("config/package-solution-env-settings.json")
    }

    pub fn environment(&self, name: &str) -> Value {
        self.settings()["environments"]
            .as_array()
            .unwrap()
            .iter()
            .find(|e| e["environment"] == name)
            .cloned()
            .unwrap_or(Value::Null)
    }
}

/// Deterministic id source: `00000000-0000-4000-8000-00000000000N`.
pub fn sequential_ids() -> impl FnMut() -> UniqueId {
    let mut n = 0u64;
    move || {
        n += 1;
        UniqueId::new(format!("00000000-0000-4000-8000-{n:012}"))
    }
}

pub fn entry_ids(environment: &Value) -> Vec<(String, String)> {
    environment["entries"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| {
            (
                e["location"].as_str().unwrap().to_string(),
                e["id"].as_str().unwrap().to_string(),
            )
        })
        .collect()
}
