//! Pipeline assembler: maps a build mode to a fully constructed plan.
//!
//! The plan is the concatenation of fixed layers. Each layer is built as an
//! independent fragment from the inputs alone, so the result depends on
//! nothing but the mode and [`PlanInputs`].

use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use serde_json::{json, Value};
use sitepack_config::{BuildMode, PackageInfo, SiteConfig};

use crate::banner::Banner;
use crate::plan::{BuildPlan, DevServer, DevTool, OutputConfig};
use crate::stage::{StageDescriptor, StageKind};

/// Images at or above this size are emitted as files instead of inlined.
pub const IMAGE_INLINE_LIMIT: u64 = 3000;

/// Worker count handed to the minifier.
pub const MINIFY_PARALLELISM: u64 = 4;

/// ECMAScript level the minifier targets.
pub const MINIFY_ECMA: u64 = 8;

const CSS_ASSET_PATTERN: &str = r"\.css\.*(?!.*map)$";

/// Everything the assembler reads besides the mode.
#[derive(Debug, Clone)]
pub struct PlanInputs {
    /// Project root that relative config paths are resolved against
    pub root: PathBuf,
    pub package: PackageInfo,
    /// Configuration with the mode's profile already applied
    pub site: SiteConfig,
    /// Timestamp written into the bundle banner
    pub build_time: NaiveDateTime,
}

impl PlanInputs {
    fn resolve(&self, path: &Path) -> PathBuf {
        self.root.join(path)
    }

    fn output_dir(&self) -> PathBuf {
        self.resolve(&self.site.output.dir)
    }
}

/// A layer's contribution to the plan.
#[derive(Debug, Default)]
struct PlanFragment {
    stages: Vec<StageDescriptor>,
    public_path: Option<String>,
    devtool: Option<DevTool>,
    dev_server: Option<DevServer>,
}

impl PlanFragment {
    fn stages(stages: Vec<StageDescriptor>) -> Self {
        Self {
            stages,
            ..Self::default()
        }
    }

    fn apply(self, mut plan: BuildPlan) -> BuildPlan {
        plan.stages.extend(self.stages);
        if let Some(public_path) = self.public_path {
            plan.output.public_path = public_path;
        }
        plan.devtool = self.devtool.or(plan.devtool);
        plan.dev_server = self.dev_server.or(plan.dev_server);
        plan
    }
}

/// Assemble the build plan for `mode`.
///
/// Development gets the base and development layers; production adds the
/// release layer instead; upload adds the upload layer after release.
pub fn assemble(mode: BuildMode, inputs: &PlanInputs) -> BuildPlan {
    let layers = match mode {
        BuildMode::Development => vec![base_layer(inputs), development_layer(inputs)],
        BuildMode::Production => vec![base_layer(inputs), release_layer(inputs)],
        BuildMode::Upload => vec![
            base_layer(inputs),
            release_layer(inputs),
            upload_layer(inputs),
        ],
    };

    let plan = BuildPlan {
        mode,
        entries: inputs.site.entries.clone(),
        output: output_config(inputs),
        stages: Vec::new(),
        devtool: None,
        dev_server: None,
    };
    let plan = layers
        .into_iter()
        .fold(plan, |plan, fragment| fragment.apply(plan));

    tracing::debug!(
        mode = %mode,
        stages = plan.stages.len(),
        public_path = %plan.output.public_path,
        "assembled build plan"
    );
    plan
}

fn output_config(inputs: &PlanInputs) -> OutputConfig {
    let version = &inputs.package.version;
    let dir = inputs.output_dir();
    OutputConfig {
        html_path: dir.join(&inputs.site.output.html_filename),
        dir,
        public_path: inputs.site.output.public_path.clone(),
        script_pattern: format!("{version}/js/[name].js"),
        style_pattern: format!("{version}/css/app.css"),
    }
}

fn display(path: &Path) -> String {
    path.display().to_string()
}

/// Loaders, extraction, templating, static copy and the vendor reference.
fn base_layer(inputs: &PlanInputs) -> PlanFragment {
    let site = &inputs.site;
    let output = output_config(inputs);

    let mappings: Vec<Value> = site
        .static_mappings
        .iter()
        .map(|mapping| {
            json!({
                "from": display(&inputs.resolve(&mapping.from)),
                "to": display(&inputs.resolve(&mapping.to)),
            })
        })
        .collect();

    PlanFragment::stages(vec![
        StageDescriptor::new(StageKind::LoadStyles)
            .with("test", r"\.css$")
            .with("loaders", json!(["css-loader?-minimize", "postcss-loader"]))
            .with("extract", true)
            .with("fallback", "style-loader"),
        StageDescriptor::new(StageKind::LoadStyles)
            .with("test", r"\.scss$")
            .with(
                "loaders",
                json!(["css-loader?-minimize", "sass-loader", "postcss-loader"]),
            )
            .with("extract", true)
            .with("fallback", "style-loader"),
        // Embedded <style lang="scss"> blocks go through the same extraction
        StageDescriptor::new(StageKind::LoadComponents)
            .with("test", r"\.vue$")
            .with("loader", "vue-loader")
            .with(
                "embedded",
                json!({
                    "sass": {
                        "loaders": ["css-loader?-minimize", "sass-loader"],
                        "extract": true,
                        "fallback": "vue-style-loader",
                    }
                }),
            )
            .with("postcss", json!(["autoprefixer"])),
        StageDescriptor::new(StageKind::LoadScripts)
            .with("test", r"\.js$")
            .with("loader", "babel-loader")
            .with("exclude", "node_modules"),
        StageDescriptor::new(StageKind::LoadSprites)
            .with("test", r"\.svg$")
            .with("loader", "svg-sprite-loader"),
        StageDescriptor::new(StageKind::LoadImages)
            .with("test", r"\.(png|jpg|gif|webp)$")
            .with("loader", "url-loader")
            .with("inline_limit", IMAGE_INLINE_LIMIT)
            .with("name", "img/[name].[ext]"),
        StageDescriptor::new(StageKind::ConcatModules),
        StageDescriptor::new(StageKind::CleanOutput).with("dir", display(&output.dir)),
        StageDescriptor::new(StageKind::GenerateHtml)
            .with("template", display(&inputs.resolve(&site.template)))
            .with("filename", display(&output.html_path)),
        StageDescriptor::new(StageKind::ExtractCss).with("filename", output.style_pattern),
        StageDescriptor::new(StageKind::OptimizeCss)
            .with("asset_name_pattern", CSS_ASSET_PATTERN)
            .with("discard_comments", json!({ "remove_all": true }))
            .with("safe", true)
            .with("autoprefixer", false),
        StageDescriptor::new(StageKind::CopyStatic).with("mappings", mappings),
        StageDescriptor::new(StageKind::ReferenceVendor)
            .with("context", display(&inputs.root))
            .with("manifest", display(&inputs.resolve(&site.vendor.manifest))),
    ])
}

/// Production environment, minification, vendor injection, banner and pre-render.
fn release_layer(inputs: &PlanInputs) -> PlanFragment {
    let site = &inputs.site;
    let package = &inputs.package;
    let banner = Banner {
        name: &package.name,
        version: &package.version,
        built_at: inputs.build_time,
    };

    PlanFragment::stages(vec![
        StageDescriptor::new(StageKind::DefineEnv)
            .with("process.env", json!({ "NODE_ENV": "\"production\"" })),
        StageDescriptor::new(StageKind::LoaderOptions).with("minimize", true),
        StageDescriptor::new(StageKind::Minify)
            .with("cache", true)
            .with("source_map", false)
            .with("parallel", MINIFY_PARALLELISM)
            .with("ecma", MINIFY_ECMA)
            .with("warnings", false)
            .with("compress", json!({ "drop_console": true }))
            .with("output", json!({ "comments": false, "beautify": false })),
        // Prepended so template-declared assets stay in place
        StageDescriptor::new(StageKind::IncludeExternalScript)
            .with("assets", json!([site.vendor.asset]))
            .with("public_path", site.vendor.asset_public_path.as_str())
            .with("append", false),
        StageDescriptor::new(StageKind::InjectBanner).with("banner", banner.to_string()),
        StageDescriptor::new(StageKind::PreRender)
            .with("static_dir", display(&inputs.output_dir()))
            .with("routes", json!(site.routes))
            .with(
                "renderer",
                json!({
                    "kind": "headless",
                    "render_after_document_event": site.prerender.render_event,
                    "inject": site.prerender.inject,
                }),
            )
            .with(
                "post_process",
                json!({
                    "public_path": package.public_path,
                    "app_root_id": site.prerender.app_root_id,
                }),
            ),
    ])
}

/// Ship the output directory to the remote host.
fn upload_layer(inputs: &PlanInputs) -> PlanFragment {
    let package = &inputs.package;
    PlanFragment::stages(vec![
        StageDescriptor::new(StageKind::Upload)
            .with("host", json!(inputs.site.upload.host))
            .with("source", display(&inputs.resolve(&inputs.site.upload.source)))
            .with("server_dir", json!(package.ftp_server))
            .with("target", json!(package.ftp_target)),
    ])
}

/// Root public path, eval source maps, vendor script from disk, dev server.
fn development_layer(inputs: &PlanInputs) -> PlanFragment {
    let site = &inputs.site;
    PlanFragment {
        stages: vec![
            StageDescriptor::new(StageKind::IncludeExternalScript)
                .with("filepath", display(&inputs.resolve(&site.vendor.script)))
                .with("include_source_map", false),
        ],
        public_path: Some("/".to_string()),
        devtool: Some(DevTool::CheapModuleEvalSourceMap),
        dev_server: Some(DevServer {
            content_base: inputs.output_dir(),
            host: site.dev_server.host.clone(),
            port: site.dev_server.port,
            compress: site.dev_server.compress,
            history_fallback: site.dev_server.history_fallback,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn inputs() -> PlanInputs {
        PlanInputs {
            root: PathBuf::from("/project"),
            package: PackageInfo::new("shop", "1.2.0").with_public_path("/static/"),
            site: SiteConfig::default(),
            build_time: NaiveDate::from_ymd_opt(2024, 3, 5)
                .unwrap()
                .and_hms_opt(9, 7, 3)
                .unwrap(),
        }
    }

    #[test]
    fn output_uses_versioned_patterns() {
        let plan = assemble(BuildMode::Production, &inputs());
        assert_eq!(plan.output.dir, PathBuf::from("/project/build"));
        assert_eq!(plan.output.script_pattern, "1.2.0/js/[name].js");
        assert_eq!(plan.output.style_pattern, "1.2.0/css/app.css");
        assert_eq!(plan.output.html_path, PathBuf::from("/project/build/index.html"));
    }

    #[test]
    fn base_layer_is_shared_by_all_modes() {
        let base = base_layer(&inputs()).stages;
        for mode in BuildMode::ALL {
            let plan = assemble(mode, &inputs());
            assert_eq!(&plan.stages[..base.len()], base.as_slice(), "{mode}");
        }
    }

    #[test]
    fn images_inline_below_limit() {
        let plan = assemble(BuildMode::Development, &inputs());
        let images = plan.stage(StageKind::LoadImages).unwrap();
        assert_eq!(images.get("inline_limit"), Some(&json!(3000)));
        assert_eq!(images.get("name"), Some(&json!("img/[name].[ext]")));
    }

    #[test]
    fn static_mappings_are_resolved_against_root() {
        let plan = assemble(BuildMode::Development, &inputs());
        let copy = plan.stage(StageKind::CopyStatic).unwrap();
        assert_eq!(
            copy.get("mappings"),
            Some(&json!([{ "from": "/project/static", "to": "/project/build/lib" }]))
        );
    }

    #[test]
    fn banner_carries_name_version_and_time() {
        let plan = assemble(BuildMode::Production, &inputs());
        let banner = plan.stage(StageKind::InjectBanner).unwrap();
        assert_eq!(banner.get("banner"), Some(&json!("shop 1.2.0 2024/3/5 9:7:3")));
    }

    #[test]
    fn prerender_gets_routes_and_hook_settings() {
        let plan = assemble(BuildMode::Production, &inputs());
        let prerender = plan.stage(StageKind::PreRender).unwrap();
        assert_eq!(
            prerender.get("routes"),
            Some(&json!(["/", "/detail", "/detail2"]))
        );
        assert_eq!(
            prerender.get("post_process"),
            Some(&json!({ "public_path": "/static/", "app_root_id": "app" }))
        );
        assert_eq!(
            prerender.get("renderer").and_then(|r| r.get("render_after_document_event")),
            Some(&json!("render-event"))
        );
    }

    #[test]
    fn development_injects_vendor_script_from_disk() {
        let plan = assemble(BuildMode::Development, &inputs());
        let include = plan.stage(StageKind::IncludeExternalScript).unwrap();
        assert_eq!(
            include.get("filepath"),
            Some(&json!("/project/static/vendor.dll.js"))
        );
        assert_eq!(include.get("include_source_map"), Some(&json!(false)));
        assert_eq!(plan.devtool, Some(DevTool::CheapModuleEvalSourceMap));
    }

    #[test]
    fn development_forces_root_public_path() {
        let mut inputs = inputs();
        inputs.site.output.public_path = "/cdn/".to_string();

        assert_eq!(assemble(BuildMode::Development, &inputs).output.public_path, "/");
        assert_eq!(assemble(BuildMode::Production, &inputs).output.public_path, "/cdn/");
    }

    #[test]
    fn dev_server_is_rooted_at_output() {
        let plan = assemble(BuildMode::Development, &inputs());
        let server = plan.dev_server.unwrap();
        assert_eq!(server.content_base, PathBuf::from("/project/build"));
        assert!(server.compress);
        assert!(server.history_fallback);
    }

    #[test]
    fn release_has_no_dev_server() {
        let plan = assemble(BuildMode::Upload, &inputs());
        assert!(plan.dev_server.is_none());
        assert!(plan.devtool.is_none());
    }
}
