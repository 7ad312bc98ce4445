use seeder::config::{ConfigLoader, Profile};
use std::{
    env, fs,
    sync::{Mutex, MutexGuard, OnceLock},
};
use tempfile::TempDir;

fn env_lock() -> &'static Mutex<()> {
    static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    LOCK.get_or_init(|| Mutex::new(()))
}

fn env_guard() -> MutexGuard<'static, ()> {
    env_lock()
        .lock()
        .unwrap_or_else(|poison| poison.into_inner())
}

fn clear_env() {
    unsafe {
        env::remove_var("HRSEED_PROFILE");
        env::remove_var("HRSEED_DATABASE_URL");
        env::remove_var("HRSEED_LOG_LEVEL");
        env::remove_var("HRSEED_SAAS_INSTALL");
        env::remove_var("HRSEED_FIXTURE_SEED");
    }
}

fn write_env_file(dir: &TempDir, name: &str, contents: &str) {
    let path = dir.path().join(name);
    fs::write(path, contents).unwrap();
}

#[test]
fn loads_defaults_when_no_env_present() {
    let _guard = env_guard();
    clear_env();

    let temp_dir = TempDir::new().unwrap();
    let loader = ConfigLoader::with_base_dir(temp_dir.path().to_path_buf());
    let cfg = loader.load().expect("config loads with defaults");

    assert_eq!(cfg.seed_profile().unwrap(), Profile::Demo);
    assert_eq!(cfg.database_url, "postgres://localhost:5432/hrplatform");
    assert!(!cfg.saas_install);
    assert_eq!(cfg.fixture_seed, 42);
    clear_env();
}

#[test]
fn layered_env_files_apply_in_order() {
    let _guard = env_guard();
    clear_env();

    let temp_dir = TempDir::new().unwrap();
    write_env_file(
        &temp_dir,
        ".env",
        "HRSEED_DATABASE_URL=postgres://base:5432/hr\n",
    );
    // Select the profile via .env.local before profile-specific files load.
    write_env_file(
        &temp_dir,
        ".env.local",
        "HRSEED_PROFILE=minimal\nHRSEED_DATABASE_URL=postgres://local:5432/hr\n",
    );
    write_env_file(
        &temp_dir,
        ".env.minimal",
        "HRSEED_DATABASE_URL=postgres://profile:5432/hr\n",
    );
    write_env_file(
        &temp_dir,
        ".env.minimal.local",
        "HRSEED_DATABASE_URL=postgres://profile-local:5432/hr\nHRSEED_FIXTURE_SEED=7\n",
    );

    let loader = ConfigLoader::with_base_dir(temp_dir.path().to_path_buf());
    let cfg = loader.load().expect("layered config loads");

    assert_eq!(cfg.seed_profile().unwrap(), Profile::Minimal);
    assert_eq!(cfg.database_url, "postgres://profile-local:5432/hr");
    assert_eq!(cfg.fixture_seed, 7);
    clear_env();
}

#[test]
fn process_env_wins_over_files() {
    let _guard = env_guard();
    clear_env();

    let temp_dir = TempDir::new().unwrap();
    write_env_file(
        &temp_dir,
        ".env",
        "HRSEED_DATABASE_URL=postgres://file:5432/hr\nHRSEED_SAAS_INSTALL=false\n",
    );

    unsafe {
        env::set_var("HRSEED_DATABASE_URL", "postgres://proc:5432/hr");
        env::set_var("HRSEED_SAAS_INSTALL", "true");
    }

    let loader = ConfigLoader::with_base_dir(temp_dir.path().to_path_buf());
    let cfg = loader.load().expect("config loads");

    assert_eq!(cfg.database_url, "postgres://proc:5432/hr");
    assert!(cfg.saas_install);
    clear_env();
}

#[test]
fn rejects_unknown_profile_from_env() {
    let _guard = env_guard();
    clear_env();

    let temp_dir = TempDir::new().unwrap();
    write_env_file(&temp_dir, ".env", "HRSEED_PROFILE=full\n");

    let loader = ConfigLoader::with_base_dir(temp_dir.path().to_path_buf());
    assert!(loader.load().is_err());
    clear_env();
}
