use anyhow::Result;
use sem_keywords::{
    decode_data_uri, parse_csv, CliConfig, KeywordEngine, KeywordError, KeywordPipeline,
    LocalStorage, OutputFormat, TomlConfig,
};
use tempfile::TempDir;

fn cli_config(output_path: &str) -> CliConfig {
    CliConfig {
        products: vec![],
        products_file: Some("products.txt".to_string()),
        words: vec![],
        words_file: Some("words.txt".to_string()),
        match_types: vec!["Exact".to_string(), "Phrase".to_string()],
        order_matters: true,
        campaign_name: "SEM_Campaign".to_string(),
        output_path: output_path.to_string(),
        output_file: "rawdata.csv".to_string(),
        format: OutputFormat::Csv,
        include_index: false,
        max_rows: 1_000,
        verbose: false,
    }
}

#[tokio::test]
async fn test_end_to_end_csv_from_term_files() -> Result<()> {
    let temp_dir = TempDir::new()?;
    std::fs::write(temp_dir.path().join("products.txt"), "honda\ntoyota\nhonda\n\n")?;
    std::fs::write(temp_dir.path().join("words.txt"), "buy\n  price \n")?;

    let storage = LocalStorage::new(temp_dir.path());
    let pipeline = KeywordPipeline::new(storage, cli_config("output"));
    let engine = KeywordEngine::new(pipeline);

    let report = engine.run().await?;

    // 2 products x 2 words x 2 orientations x 2 match types
    assert_eq!(report.summary.total_keywords, 16);
    assert_eq!(report.summary.unique_keywords, 16);
    assert_eq!(report.summary.ad_groups, 2);
    assert!(report.output_path.ends_with("rawdata.csv"));

    let written = std::fs::read_to_string(temp_dir.path().join("output").join("rawdata.csv"))?;
    let rows = parse_csv(&written)?;
    assert_eq!(rows.len(), 16);
    assert_eq!(rows[0].keyword, "[honda buy]");
    assert_eq!(rows[1].keyword, "\"honda buy\"");
    assert_eq!(rows[8].keyword, "[buy honda]");
    assert_eq!(rows[8].ad_group, "honda");
    assert_eq!(rows[8].labels, "buy");

    Ok(())
}

#[tokio::test]
async fn test_end_to_end_data_uri_output() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let mut config = cli_config("out");
    config.products = vec!["honda".to_string()];
    config.products_file = None;
    config.words = vec!["buy".to_string()];
    config.words_file = None;
    config.format = OutputFormat::DataUri;
    config.output_file = "download.txt".to_string();
    config.include_index = true;

    let pipeline = KeywordPipeline::new(LocalStorage::new(temp_dir.path()), config);
    let report = KeywordEngine::new(pipeline).run().await?;
    assert_eq!(report.summary.total_keywords, 4);

    let written = std::fs::read_to_string(temp_dir.path().join("out").join("download.txt"))?;
    let rows = parse_csv(&decode_data_uri(&written)?)?;
    let indexes: Vec<usize> = rows.iter().map(|r| r.index).collect();
    assert_eq!(indexes, vec![1, 2, 3, 4]);

    Ok(())
}

#[tokio::test]
async fn test_row_limit_stops_before_writing() -> Result<()> {
    let temp_dir = TempDir::new()?;
    std::fs::write(temp_dir.path().join("products.txt"), "honda\ntoyota\n")?;
    std::fs::write(temp_dir.path().join("words.txt"), "buy\nprice\n")?;

    let mut config = cli_config("output");
    config.max_rows = 10;

    let pipeline = KeywordPipeline::new(LocalStorage::new(temp_dir.path()), config);
    let result = KeywordEngine::new(pipeline).run().await;

    assert!(matches!(
        result,
        Err(KeywordError::RowLimitExceeded {
            requested: 16,
            limit: 10
        })
    ));
    assert!(!temp_dir.path().join("output").join("rawdata.csv").exists());

    Ok(())
}

#[tokio::test]
async fn test_toml_job_with_json_output() -> Result<()> {
    let temp_dir = TempDir::new()?;
    std::fs::write(temp_dir.path().join("words.txt"), "buy\nshop\n")?;

    let config = TomlConfig::from_toml_str(
        r#"
[campaign]
name = "Cars"
match_types = ["Modified"]
order_matters = false

[input]
products = ["honda civic"]
words_file = "words.txt"

[output]
path = "results"
file = "keywords.json"
format = "json"
"#,
    )?;

    let pipeline = KeywordPipeline::new(LocalStorage::new(temp_dir.path()), config);
    let report = KeywordEngine::new(pipeline).run().await?;
    assert_eq!(report.summary.total_keywords, 2);

    let written =
        std::fs::read_to_string(temp_dir.path().join("results").join("keywords.json"))?;
    let rows: Vec<serde_json::Value> = serde_json::from_str(&written)?;
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["Keyword"], "+honda +civic +buy");
    assert_eq!(rows[0]["Criterion Type"], "Modified");
    assert_eq!(rows[1]["Labels"], "shop");

    Ok(())
}
