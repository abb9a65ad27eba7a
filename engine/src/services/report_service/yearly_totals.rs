// Handler for the per-year totals view over fixed-schema exports.
use shared::models::YearTotal;

use crate::data::loader;
use crate::error::EngineError;
use crate::report::format;

pub fn handle_yearly_totals(path: &str) -> Result<Vec<YearTotal>, EngineError> {
    let records = loader::load_sales_records(path)?;
    Ok(format::yearly_totals(&records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_totals_from_typed_csv() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "Product_ID,Sale_Date,Sales_Amount,Quantity_Sold,Unit_Cost,Unit_Price,Discount\n\
             P1,2023-02-01,100.10,1,0,0,0\n\
             P2,2023-09-15,50.15,1,0,0,0\n\
             P3,2022-01-01,10,1,0,0,0"
        )
        .unwrap();
        file.flush().unwrap();

        let totals = handle_yearly_totals(file.path().to_str().unwrap()).unwrap();
        assert_eq!(totals.len(), 2);
        assert_eq!(totals[0].year, "2022");
        assert_eq!(totals[0].total_sales, 10.0);
        assert_eq!(totals[1].year, "2023");
        assert_eq!(totals[1].total_sales, 150.25);
    }
}
