use super::support::titled;
use super::{date, IntegrationHarness};
use anyhow::Result;
use std::fs;
use trendlog::config::AppConfig;

#[test]
fn overview_tracks_the_latest_day_set() -> Result<()> {
    let harness = IntegrationHarness::new();
    let pipeline = harness.pipeline();
    let day = date("2024-05-01");

    pipeline.record(day, titled(&["A", "B"]))?;
    let summary = pipeline.record(day, titled(&["C"]))?;

    let text = fs::read_to_string(&summary.overview_path)?;
    assert_eq!(
        text,
        "# Trending Searches\n\n<!-- BEGIN -->\n1. A\n2. B\n3. C\n<!-- END -->\n"
    );
    Ok(())
}

#[test]
fn marker_text_in_a_title_leaves_no_stale_list_behind() -> Result<()> {
    let harness = IntegrationHarness::new();
    let pipeline = harness.pipeline();
    let day = date("2024-05-01");

    pipeline.record(day, titled(&["x <!-- END --> y", "B"]))?;
    let summary = pipeline.record(day, titled(&["C"]))?;

    let text = fs::read_to_string(&summary.overview_path)?;
    assert_eq!(
        text,
        "# Trending Searches\n\n<!-- BEGIN -->\n\
         1. x &lt;!-- END --&gt; y\n2. B\n3. C\n<!-- END -->\n"
    );
    Ok(())
}

#[test]
fn hand_written_text_around_markers_survives_runs() -> Result<()> {
    let harness = IntegrationHarness::new();
    let paths = harness.paths();
    fs::write(
        &paths.overview_path,
        "# Zhihu hot searches\n\nUpdated hourly.\n\n<!-- BEGIN -->\n<!-- END -->\n\n## License\n",
    )?;

    harness.pipeline().record(date("2024-05-01"), titled(&["A"]))?;

    let text = fs::read_to_string(&paths.overview_path)?;
    assert_eq!(
        text,
        "# Zhihu hot searches\n\nUpdated hourly.\n\n<!-- BEGIN -->\n1. A\n<!-- END -->\n\n## License\n"
    );
    Ok(())
}

#[test]
fn configured_overview_location_and_title_are_used() -> Result<()> {
    let mut config = AppConfig::default();
    config.storage.overview_file = "docs/index.md".into();
    config.reports.overview_title = "Hot".into();
    let harness = IntegrationHarness::with_config(config);

    let summary = harness.pipeline().record(date("2024-05-01"), titled(&["A"]))?;
    assert_eq!(
        summary.overview_path,
        harness.workspace_path().join("docs").join("index.md")
    );
    assert!(fs::read_to_string(&summary.overview_path)?.starts_with("# Hot\n\n"));
    Ok(())
}
