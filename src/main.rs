//! Pipeline entry point for the IMDB ratings analysis.
//!
//! Runs the full pass over the raw export: clean, persist, aggregate,
//! correlate, and render charts. Paths are fixed; any stage failure aborts
//! the run and leaves earlier outputs on disk.

use anyhow::{Context, Result};
use imdb_insight::charts::{ChartLabels, ChartRenderer};
use imdb_insight::data::{cleaner, loader, writer};
use imdb_insight::stats::aggregator::{group_mean, GroupOrdering};
use imdb_insight::stats::correlation::{paired_numeric, spearman};

const INPUT_PATH: &str = "IMDB-Movie-Data.csv";
const CLEANED_PATH: &str = "Cleaned_IMDB_Movie_Data.csv";
const FINAL_PATH: &str = "Final_IMDB_Analysis.csv";
const GENRE_CHART_PATH: &str = "ratings_by_genre.png";
const YEARLY_CHART_PATH: &str = "ratings_over_time.png";
const REVENUE_CHART_PATH: &str = "revenue_vs_rating.png";

const RATING_COL: &str = "Rating";
const REVENUE_COL: &str = "Revenue (Millions)";

const ANALYSIS_COLUMNS: [&str; 8] = [
    "Rank",
    "Title",
    "Year",
    "Genre",
    RATING_COL,
    REVENUE_COL,
    "Director",
    "Actors",
];

fn main() -> Result<()> {
    let df = loader::load_csv(INPUT_PATH)
        .with_context(|| format!("failed to load {INPUT_PATH}"))?;

    println!("Missing values:");
    for (column, nulls) in cleaner::missing_value_counts(&df) {
        println!("  {column}: {nulls}");
    }

    let df = cleaner::drop_missing(&df, RATING_COL)?;
    let mut df = cleaner::project(&df, &ANALYSIS_COLUMNS)?;

    writer::write_csv(&mut df, CLEANED_PATH)?;
    println!("Cleaned dataset saved to {CLEANED_PATH} ({} rows).", df.height());

    // Highest-rated genres, best first.
    let genre_means = group_mean(&df, "Genre", RATING_COL, GroupOrdering::MeanDescending)?;
    let genres: Vec<String> = genre_means.iter().map(|g| g.key.clone()).collect();
    let genre_ratings: Vec<f64> = genre_means.iter().map(|g| g.mean).collect();
    ChartRenderer::bar_chart(
        &genres,
        &genre_ratings,
        &ChartLabels {
            title: "Average IMDB Ratings by Genre",
            x_label: "Genre",
            y_label: "IMDB Rating",
        },
        GENRE_CHART_PATH,
    )?;
    println!("Saved {GENRE_CHART_PATH}");

    // Rating trend over the years.
    let yearly_means = group_mean(&df, "Year", RATING_COL, GroupOrdering::KeyAscending)?;
    let years: Vec<i32> = yearly_means
        .iter()
        .map(|g| {
            g.key
                .parse()
                .with_context(|| format!("Year value '{}' is not numeric", g.key))
        })
        .collect::<Result<_>>()?;
    let yearly_ratings: Vec<f64> = yearly_means.iter().map(|g| g.mean).collect();
    ChartRenderer::line_chart(
        &years,
        &yearly_ratings,
        &ChartLabels {
            title: "Average IMDB Ratings Over the Years",
            x_label: "Year",
            y_label: "IMDB Rating",
        },
        YEARLY_CHART_PATH,
    )?;
    println!("Saved {YEARLY_CHART_PATH}");

    // Revenue vs. rating correlation, guarded on the column being present.
    // The revenue filter rebinds the pipeline table, so the final snapshot
    // below reflects both cleaning passes.
    if df.column(REVENUE_COL).is_ok() {
        df = cleaner::drop_missing(&df, REVENUE_COL)?;

        let (revenue, rating) = paired_numeric(&df, REVENUE_COL, RATING_COL)?;
        let correlation = spearman(&revenue, &rating)?;
        println!(
            "Spearman correlation between revenue & rating: {}",
            correlation.rho
        );
        println!("P-value: {}", correlation.p_value);

        ChartRenderer::scatter_chart(
            &revenue,
            &rating,
            &ChartLabels {
                title: "Revenue vs. Rating",
                x_label: REVENUE_COL,
                y_label: "IMDB Rating",
            },
            REVENUE_CHART_PATH,
        )?;
        println!("Saved {REVENUE_CHART_PATH}");
    }

    writer::write_csv(&mut df, FINAL_PATH)?;
    println!("Final dataset saved to {FINAL_PATH} ({} rows).", df.height());

    Ok(())
}
