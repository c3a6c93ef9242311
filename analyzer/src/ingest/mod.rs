pub mod sheet_csv;
