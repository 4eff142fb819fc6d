//! End-to-end tests for the initialization sequence, driven through a
//! `RecordingRunner` so no external tool is needed.

mod common;

use common::{run_initializer, ScratchProject, SUMMARY};
use pretty_assertions::assert_eq;
use prisma_db_init::{Config, RecordingRunner};

const GENERATE: &str = "npx prisma generate";
const PUSH: &str = "npx prisma db push --skip-generate";

const HEADER: &str = "🔧 Initializing Comic Translation Studio Database...\n\
\n\
📦 Generating Prisma Client...\n\
✅ Prisma Client generated successfully\n\
\n";

#[test]
fn fresh_database_full_transcript() {
    let project = ScratchProject::new();
    let runner = RecordingRunner::new();

    let result = run_initializer(&runner, project.root(), &Config::default());

    assert_eq!(result.code, 0);
    let expected = format!("{HEADER}🆕 Creating new database at prisma/dev.db...\n{SUMMARY}");
    assert_eq!(result.stdout, expected);
    assert_eq!(runner.commands(), vec![GENERATE, PUSH]);
}

#[test]
fn existing_database_changes_only_the_message() {
    let project = ScratchProject::with_database();
    let runner = RecordingRunner::new();

    let result = run_initializer(&runner, project.root(), &Config::default());

    assert_eq!(result.code, 0);
    let expected = format!(
        "{HEADER}📊 Database file exists at prisma/dev.db\n\
         🔄 Running migrations to ensure schema is up to date...\n{SUMMARY}"
    );
    assert_eq!(result.stdout, expected);
    assert_eq!(runner.commands(), vec![GENERATE, PUSH]);
}

#[test]
fn started_from_scripts_dir_runs_in_project_root() {
    let project = ScratchProject::new();
    let runner = RecordingRunner::new();

    let result = run_initializer(&runner, &project.scripts_dir(), &Config::default());

    assert_eq!(result.code, 0);
    for call in runner.calls() {
        assert_eq!(call.current_dir, project.root());
    }
}

#[test]
fn generate_failure_stops_before_push() {
    let project = ScratchProject::new();
    let runner = RecordingRunner::with_exit_codes([2]);

    let result = run_initializer(&runner, project.root(), &Config::default());

    assert_eq!(result.code, 1);
    assert_eq!(runner.commands(), vec![GENERATE]);
    assert!(result.stdout.ends_with(
        "📦 Generating Prisma Client...\n\
         \n\
         ❌ Error initializing database: Command `npx prisma generate` returned non-zero exit status 2\n"
    ));
    assert!(!result.stdout.contains("Prisma Client generated successfully"));
}

#[test]
fn push_failure_exits_one_after_generate() {
    let project = ScratchProject::new();
    let runner = RecordingRunner::with_exit_codes([0, 1]);

    let result = run_initializer(&runner, project.root(), &Config::default());

    assert_eq!(result.code, 1);
    assert_eq!(runner.commands(), vec![GENERATE, PUSH]);
    assert!(result.stdout.ends_with(
        "🆕 Creating new database at prisma/dev.db...\n\
         \n\
         ❌ Error initializing database: Command `npx prisma db push --skip-generate` returned non-zero exit status 1\n"
    ));
    assert!(!result.stdout.contains("Summary"));
}

#[test]
fn push_killed_by_signal_is_a_command_failure() {
    let project = ScratchProject::with_database();
    let runner = RecordingRunner::new();
    runner.push_exit(0);
    runner.push_signal();

    let result = run_initializer(&runner, project.root(), &Config::default());

    assert_eq!(result.code, 1);
    assert!(result
        .stdout
        .contains("❌ Error initializing database: Command `npx prisma db push --skip-generate` was terminated by a signal"));
}

#[test]
fn missing_tool_is_unexpected_error() {
    let project = ScratchProject::new();
    let runner = RecordingRunner::new();
    runner.push_not_found();

    let result = run_initializer(&runner, project.root(), &Config::default());

    assert_eq!(result.code, 1);
    assert_eq!(runner.call_count(), 1);
    assert!(result.stdout.ends_with(
        "\n❌ Unexpected error: Failed to run `npx prisma generate`: Program not found: npx\n"
    ));
}

#[test]
fn database_presence_never_changes_exit_code() {
    for project in [ScratchProject::new(), ScratchProject::with_database()] {
        let ok = run_initializer(&RecordingRunner::new(), project.root(), &Config::default());
        assert_eq!(ok.code, 0);

        let failed = run_initializer(
            &RecordingRunner::with_exit_codes([0, 5]),
            project.root(),
            &Config::default(),
        );
        assert_eq!(failed.code, 1);
    }
}

#[test]
fn database_url_is_passed_to_both_commands() {
    let project = ScratchProject::new();
    let runner = RecordingRunner::new();
    let mut config = Config::default();
    config.database.url = Some("file:./dev.db".to_string());

    let result = run_initializer(&runner, project.root(), &config);

    assert_eq!(result.code, 0);
    let calls = runner.calls();
    assert_eq!(calls.len(), 2);
    for call in calls {
        assert_eq!(call.env_value("DATABASE_URL"), Some("file:./dev.db"));
    }
}

#[test]
fn configured_tool_and_paths_are_used() {
    let project = ScratchProject::new();
    let runner = RecordingRunner::new();
    let mut config = Config::default();
    config.tool.program = "pnpm".to_string();
    config.tool.args = vec!["exec".to_string(), "prisma".to_string()];
    config.database.path = "prisma/test.db".into();

    let result = run_initializer(&runner, project.root(), &config);

    assert_eq!(result.code, 0);
    assert!(result.stdout.contains("🆕 Creating new database at prisma/test.db..."));
    assert_eq!(
        runner.commands(),
        vec![
            "pnpm exec prisma generate",
            "pnpm exec prisma db push --skip-generate"
        ]
    );
}

#[cfg(unix)]
#[test]
fn broken_client_path_does_not_block_push() {
    let project = ScratchProject::new();
    std::fs::write(project.root().join("node_modules"), b"not a directory").unwrap();
    let runner = RecordingRunner::new();

    let result = run_initializer(&runner, project.root(), &Config::default());

    assert_eq!(result.code, 0, "stdout: {}", result.stdout);
    assert_eq!(runner.commands(), vec![GENERATE, PUSH]);
    assert!(result.stdout.ends_with(SUMMARY));
}

#[cfg(unix)]
#[test]
fn broken_schema_path_does_not_block_generate() {
    let project = ScratchProject::new();
    // Schema path nested under a plain file: the lookup fails with ENOTDIR.
    let mut config = Config::default();
    config.project.schema = "package.json/schema.prisma".into();
    std::fs::write(project.root().join("package.json"), b"{}").unwrap();
    let runner = RecordingRunner::new();

    let result = run_initializer(&runner, project.root(), &config);

    assert_eq!(result.code, 0, "stdout: {}", result.stdout);
    assert_eq!(runner.commands(), vec![GENERATE, PUSH]);
}
