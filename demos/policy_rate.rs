use std::env;
use valet::{Valet, ValetError};

// IEXE0124: policy rate, V122530/V122531/V122538: benchmark bond yields.
const SAMPLE_SERIES: [&str; 4] = ["IEXE0124", "V122530", "V122531", "V122538"];

#[tokio::main]
async fn main() -> Result<(), ValetError> {
    configure_polars_display();
    let valet = Valet::new();

    let rates = valet
        .observations()
        .series(SAMPLE_SERIES)
        .start_date("2010-01-01")
        .call()
        .await?;

    println!("{}", rates.head(30).frame);
    if let Some((start, end)) = rates.date_bounds()? {
        println!("Start date: {}", start);
        println!("End date: {}", end);
    }

    Ok(())
}

fn configure_polars_display() {
    // show every column
    env::set_var("POLARS_FMT_MAX_COLS", "-1");
    // show all 30 rows
    env::set_var("POLARS_FMT_MAX_ROWS", "30");
}
