//! Integration tests for the full pipeline

use django_ts_generator::config::{
    Config, FieldCase, InputConfig, NamingConfig, OutputConfig, TypesConfig,
};
use django_ts_generator::pipeline::{Pipeline, RunSummary};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

fn multi_app_fixture() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("multi_app")
}

/// Create a test config with the default recognition rules
fn create_test_config(source_dir: PathBuf, dest_dir: PathBuf) -> Config {
    Config {
        input: InputConfig {
            source_dir,
            exclude: vec!["migrations".to_string()],
            recursive: true,
            file_names: vec!["models.py".to_string()],
            model_packages: vec!["models".to_string()],
            model_bases: vec!["models.Model".to_string(), "Model".to_string()],
        },
        output: OutputConfig {
            dest_dir,
            header: true,
        },
        naming: NamingConfig::default(),
        types: TypesConfig::default(),
    }
}

fn write_file(path: &Path, content: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

#[test]
fn test_full_pipeline_multi_app() {
    let temp = tempdir().unwrap();
    let dest_dir = temp.path().join("types");

    let config = create_test_config(multi_app_fixture(), dest_dir.clone());
    let summary = Pipeline::new(false).run(&config).unwrap();

    assert_eq!(
        summary,
        RunSummary {
            files_scanned: 5,
            files_written: 4,
            files_skipped: 0,
            files_without_models: 1,
            interfaces: 5,
            unknown_fields: 2,
        }
    );

    let blog = fs::read_to_string(dest_dir.join("blog").join("models.ts")).unwrap();
    assert_eq!(
        blog,
        "\
// Generated by django-ts-generator. Do not edit manually.
// Source: blog/models.py

export interface Tag {
  name?: string;
  slug?: string;
}

export interface Post {
  title?: string;
  body?: string;
  summary?: string;
  author?: number;
  tags?: number[];
  metadata?: Record<string, any>;
  published_at?: string;
  is_featured?: boolean;
  objects?: any;
}
"
    );

    let school = fs::read_to_string(dest_dir.join("school").join("models.ts")).unwrap();
    assert!(school.contains("export interface Course {\n"));
    assert!(school.contains("  name?: string;\n"));
    assert!(school.contains("  teacher?: number;\n"));
    assert!(school.contains("  tags?: number[];\n"));

    let order = fs::read_to_string(dest_dir.join("shop/models/order.ts")).unwrap();
    assert!(order.contains("// Source: shop/models/order.py\n"));
    assert!(order.contains("export interface Order {"));

    let product = fs::read_to_string(dest_dir.join("shop/models/product.ts")).unwrap();
    assert!(product.contains("export interface Product {"));
    assert!(!product.contains("ProductQuerySet"));
}

#[test]
fn test_file_without_models_produces_no_output() {
    let temp = tempdir().unwrap();
    let dest_dir = temp.path().join("types");

    let config = create_test_config(multi_app_fixture(), dest_dir.clone());
    Pipeline::new(false).run(&config).unwrap();

    assert!(!dest_dir.join("shop/models/__init__.ts").exists());
    assert!(!dest_dir.join("blog/admin.ts").exists());
}

#[test]
fn test_excluded_directories_are_not_generated() {
    let temp = tempdir().unwrap();
    let dest_dir = temp.path().join("types");

    let config = create_test_config(multi_app_fixture(), dest_dir.clone());
    Pipeline::new(false).run(&config).unwrap();

    assert!(!dest_dir.join("blog/migrations").exists());

    let mut included = create_test_config(multi_app_fixture(), temp.path().join("all"));
    included.input.exclude.clear();
    let summary = Pipeline::new(false).run(&included).unwrap();

    assert_eq!(summary.files_written, 5);
    assert!(temp.path().join("all/blog/migrations/models.ts").exists());
}

#[test]
fn test_rerun_is_byte_identical() {
    let temp = tempdir().unwrap();
    let dest_dir = temp.path().join("types");
    let config = create_test_config(multi_app_fixture(), dest_dir.clone());

    Pipeline::new(false).run(&config).unwrap();
    let first = fs::read(dest_dir.join("blog/models.ts")).unwrap();

    // Stale content must be fully replaced, not merged
    fs::write(dest_dir.join("blog/models.ts"), "// edited by hand\n".repeat(100)).unwrap();

    Pipeline::new(true).run(&config).unwrap();
    let second = fs::read(dest_dir.join("blog/models.ts")).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_non_recursive_scan() {
    let temp = tempdir().unwrap();
    let src_dir = temp.path().join("backend");
    let dest_dir = temp.path().join("types");

    write_file(
        &src_dir.join("models.py"),
        "class Root(models.Model):\n    name = models.CharField()\n",
    );
    write_file(
        &src_dir.join("nested").join("models.py"),
        "class Nested(models.Model):\n    name = models.CharField()\n",
    );

    let mut config = create_test_config(src_dir, dest_dir.clone());
    config.input.recursive = false;
    let summary = Pipeline::new(false).run(&config).unwrap();

    assert_eq!(summary.files_written, 1);
    assert!(dest_dir.join("models.ts").exists());
    assert!(!dest_dir.join("nested").exists());
}

#[test]
fn test_unparsable_file_is_skipped() {
    let temp = tempdir().unwrap();
    let src_dir = temp.path().join("backend");
    let dest_dir = temp.path().join("types");

    write_file(
        &src_dir.join("broken").join("models.py"),
        "class Broken(\n    models.Model,\n",
    );
    fs::create_dir_all(src_dir.join("binary")).unwrap();
    fs::write(src_dir.join("binary").join("models.py"), [0xff, 0xfe, 0x00, 0x80]).unwrap();
    write_file(
        &src_dir.join("good").join("models.py"),
        "class Good(models.Model):\n    name = models.CharField()\n",
    );

    let config = create_test_config(src_dir, dest_dir.clone());
    let summary = Pipeline::new(false).run(&config).unwrap();

    assert_eq!(summary.files_scanned, 3);
    assert_eq!(summary.files_skipped, 2);
    assert_eq!(summary.files_written, 1);
    assert!(dest_dir.join("good/models.ts").exists());
    assert!(!dest_dir.join("broken/models.ts").exists());
    assert!(!dest_dir.join("binary/models.ts").exists());
}

#[test]
fn test_write_failure_aborts_run() {
    let temp = tempdir().unwrap();
    let src_dir = temp.path().join("backend");

    write_file(
        &src_dir.join("blog").join("models.py"),
        "class Post(models.Model):\n    title = models.CharField()\n",
    );

    // A regular file where the destination directory should be
    let dest_dir = temp.path().join("types");
    write_file(&dest_dir, "not a directory");

    let config = create_test_config(src_dir, dest_dir);
    let result = Pipeline::new(false).run(&config);

    assert!(result.is_err());
}

#[test]
fn test_pipeline_with_naming_and_overrides() {
    let temp = tempdir().unwrap();
    let src_dir = temp.path().join("backend");
    let dest_dir = temp.path().join("types");

    write_file(
        &src_dir.join("accounts").join("models.py"),
        r#"
class Profile(models.Model):
    user = models.OneToOneField(User, on_delete=models.CASCADE)
    phone_number = PhoneNumberField()
    created_at = models.DateTimeField(auto_now_add=True)
    avatar_url = models.URLField(blank=True)
    settings = CustomSettingsField()
"#,
    );

    let mut config = create_test_config(src_dir, dest_dir.clone());
    config.output.header = false;
    config.naming = NamingConfig {
        type_prefix: "I".to_string(),
        type_suffix: "".to_string(),
        field_case: FieldCase::Camel,
    };
    config.types.fallback = "unknown".to_string();
    config
        .types
        .overrides
        .insert("PhoneNumberField".to_string(), "string".to_string());

    let summary = Pipeline::new(false).run(&config).unwrap();
    assert_eq!(summary.unknown_fields, 1);

    let output = fs::read_to_string(dest_dir.join("accounts/models.ts")).unwrap();
    assert_eq!(
        output,
        "\
export interface IProfile {
  user?: number;
  phoneNumber?: string;
  createdAt?: string;
  avatarUrl?: string;
  settings?: unknown;
}
"
    );
}

#[test]
fn test_source_dir_is_models_package() {
    let temp = tempdir().unwrap();
    let src_dir = temp.path().join("appname").join("models");
    let dest_dir = temp.path().join("types");

    write_file(
        &src_dir.join("user.py"),
        "class Member(models.Model):\n    email = models.EmailField()\n",
    );
    write_file(
        &src_dir.join("post.py"),
        "class Entry(models.Model):\n    author = models.ForeignKey(Member, on_delete=models.CASCADE)\n",
    );

    let config = create_test_config(src_dir, dest_dir.clone());
    let summary = Pipeline::new(false).run(&config).unwrap();

    assert_eq!(summary.interfaces, 2);
    assert!(fs::read_to_string(dest_dir.join("user.ts"))
        .unwrap()
        .contains("  email?: string;\n"));
    assert!(fs::read_to_string(dest_dir.join("post.ts"))
        .unwrap()
        .contains("  author?: number;\n"));
}

#[test]
fn test_pipeline_empty_source() {
    let temp = tempdir().unwrap();
    let src_dir = temp.path().join("backend");
    let dest_dir = temp.path().join("types");
    fs::create_dir_all(&src_dir).unwrap();

    let config = create_test_config(src_dir, dest_dir.clone());
    let summary = Pipeline::new(false).run(&config).unwrap();

    assert_eq!(summary, RunSummary::default());
    assert!(!dest_dir.exists());
}

#[test]
fn test_pipeline_missing_source_dir() {
    let temp = tempdir().unwrap();
    let config = create_test_config(temp.path().join("missing"), temp.path().join("types"));

    let result = Pipeline::new(false).run(&config);
    assert!(result.is_err());
    assert!(result
        .unwrap_err()
        .to_string()
        .contains("Source directory does not exist"));
}

#[test]
fn test_init_config_drives_pipeline() {
    let temp = tempdir().unwrap();
    let config_path = temp.path().join("django-ts.toml");

    let mut config = Config::default_config();
    config.input.source_dir = multi_app_fixture();
    config.output.dest_dir = temp.path().join("types");
    config.save(&config_path).unwrap();

    let loaded = Config::load(&config_path).unwrap();
    let summary = Pipeline::new(false).run(&loaded).unwrap();

    // default_config excludes migrations
    assert_eq!(summary.files_written, 4);
    assert_eq!(summary.interfaces, 5);
}

#[cfg(unix)]
#[test]
fn test_symlink_loop_does_not_abort_run() {
    let temp = tempdir().unwrap();
    let src_dir = temp.path().join("backend");
    let dest_dir = temp.path().join("types");

    write_file(
        &src_dir.join("blog").join("models.py"),
        "class Post(models.Model):\n    title = models.CharField()\n",
    );
    std::os::unix::fs::symlink(&src_dir, src_dir.join("blog").join("loop")).unwrap();

    let config = create_test_config(src_dir, dest_dir.clone());
    let summary = Pipeline::new(false).run(&config).unwrap();

    assert_eq!(summary.files_written, 1);
    assert!(fs::read_to_string(dest_dir.join("blog/models.ts"))
        .unwrap()
        .contains("export interface Post {"));
}
