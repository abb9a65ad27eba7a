use serde::{Deserialize, Deserializer, Serialize};

/// One month bucket of a yearly sales report. `value` is the rounded sum of
/// every row resolved into that (year, month) slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlySales {
    pub month: String,
    pub value: i64,
}

/// A full calendar year of sales, always carrying exactly 12 monthly
/// buckets in Jan..Dec order, however sparse the source data was.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearSales {
    pub year: i32,
    pub monthly: Vec<MonthlySales>,
}

/// Lighter per-year aggregate used by the secondary totals view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearTotal {
    pub year: String,
    #[serde(rename = "totalSales")]
    pub total_sales: f64,
}

/// A typed sales row for datasets following the well-known fixed schema.
/// The schema-inference pipeline never uses this; it backs the totals view
/// only, where column names are assumed, not detected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalesRecord {
    #[serde(rename = "Product_ID")]
    pub product_id: String,
    #[serde(rename = "Sale_Date")]
    pub sale_date: String,
    #[serde(rename = "Sales_Rep", default)]
    pub sales_rep: String,
    #[serde(rename = "Region", default)]
    pub region: String,
    #[serde(rename = "Sales_Amount", default, deserialize_with = "lenient_f64")]
    pub sales_amount: f64,
    #[serde(rename = "Quantity_Sold", default, deserialize_with = "lenient_f64")]
    pub quantity_sold: f64,
    #[serde(rename = "Product_Category", default)]
    pub product_category: String,
    #[serde(rename = "Unit_Cost", default, deserialize_with = "lenient_f64")]
    pub unit_cost: f64,
    #[serde(rename = "Unit_Price", default, deserialize_with = "lenient_f64")]
    pub unit_price: f64,
    #[serde(rename = "Customer_Type", default)]
    pub customer_type: String,
    #[serde(rename = "Discount", default, deserialize_with = "lenient_f64")]
    pub discount: f64,
    #[serde(rename = "Payment_Method", default)]
    pub payment_method: String,
    #[serde(rename = "Sales_Channel", default)]
    pub sales_channel: String,
    #[serde(rename = "Region_and_Sales_Rep", default)]
    pub region_and_sales_rep: String,
}

// Numeric cells in real exports are often empty or carry stray formatting;
// a bad cell becomes 0.0 rather than failing the whole file.
fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let s: &str = Deserialize::deserialize(deserializer)?;
    Ok(s.trim().parse::<f64>().unwrap_or(0.0))
}
