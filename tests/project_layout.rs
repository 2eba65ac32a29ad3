use std::error::Error;
use std::fs;

use tempfile::tempdir;

use docreload::project::ProjectLayout;

type TestResult = Result<(), Box<dyn Error>>;

#[test]
fn nested_source_directory_wins() -> TestResult {
    let dir = tempdir()?;
    let root = dir.path();
    fs::create_dir_all(root.join("source"))?;
    fs::write(root.join("source").join("conf.py"), "project = 'demo'\n")?;
    // A stray conf.py at the root must not shadow source/conf.py.
    fs::write(root.join("conf.py"), "project = 'decoy'\n")?;

    let layout = ProjectLayout::discover(root, None)?;
    assert_eq!(layout.source_dir, root.join("source"));
    assert_eq!(layout.build_dir, root.join("_build"));
    assert_eq!(layout.html_dir, root.join("_build").join("html"));

    Ok(())
}

#[test]
fn flat_layout_uses_the_root_as_source() -> TestResult {
    let dir = tempdir()?;
    let root = dir.path();
    fs::write(root.join("conf.py"), "project = 'demo'\n")?;

    let layout = ProjectLayout::discover(root, None)?;
    assert_eq!(layout.source_dir, root);
    assert_eq!(layout.doc_root, root);

    Ok(())
}

#[test]
fn makefile_path_resolves_to_its_directory() -> TestResult {
    let dir = tempdir()?;
    let root = dir.path();
    fs::write(root.join("conf.py"), "project = 'demo'\n")?;
    fs::write(root.join("Makefile"), "html:\n")?;

    let layout = ProjectLayout::discover(root.join("Makefile"), None)?;
    assert_eq!(layout.doc_root, root);
    assert_eq!(layout.source_dir, root);

    Ok(())
}

#[test]
fn missing_conf_py_is_a_fatal_layout_error() -> TestResult {
    let dir = tempdir()?;

    let err = match ProjectLayout::discover(dir.path(), None) {
        Ok(_) => return Err("expected discovery to fail".into()),
        Err(err) => err,
    };
    assert!(err.to_string().contains("conf.py"));

    Ok(())
}

#[test]
fn build_command_pins_the_build_directory() -> TestResult {
    let dir = tempdir()?;
    let root = dir.path();
    fs::write(root.join("conf.py"), "project = 'demo'\n")?;

    let layout = ProjectLayout::discover(root, None)?;
    let build = layout.build_command();
    assert_eq!(
        build.command(),
        format!("make html BUILDDIR={}", root.join("_build").display())
    );
    assert_eq!(build.cwd(), layout.doc_root);

    Ok(())
}

#[test]
fn build_dir_override_is_respected() -> TestResult {
    let dir = tempdir()?;
    let root = dir.path();
    fs::write(root.join("conf.py"), "project = 'demo'\n")?;
    let custom = root.join("out");

    let layout = ProjectLayout::discover(root, Some(custom.clone()))?;
    assert_eq!(layout.build_dir, custom);
    assert_eq!(layout.html_dir, custom.join("html"));
    assert!(layout.build_command().command().contains("BUILDDIR"));

    Ok(())
}

#[test]
fn default_watch_patterns_cover_config_assets_and_sources() -> TestResult {
    let dir = tempdir()?;
    let root = dir.path();
    fs::write(root.join("conf.py"), "project = 'demo'\n")?;

    let layout = ProjectLayout::discover(root, None)?;
    let patterns = layout.default_watch_patterns();

    assert_eq!(patterns.len(), 5);
    assert!(patterns[0].ends_with("conf.py"));
    assert!(patterns.iter().any(|p| p.ends_with("_static/*.css")));
    assert!(patterns.iter().any(|p| p.ends_with("_templates/*.html")));
    assert!(patterns.iter().any(|p| p.ends_with("/*.rst")));
    assert!(patterns.iter().any(|p| p.ends_with("/**/*.rst")));

    Ok(())
}
