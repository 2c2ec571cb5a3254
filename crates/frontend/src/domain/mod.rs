pub mod a001_case_definition;
pub mod a002_case_list_column;
pub mod a003_case_search_field;
pub mod a004_case_tab;
pub mod a005_case_widget;
pub mod a006_case_status;
pub mod a007_case_instance;
pub mod a008_case_note;
pub mod a009_case_document;
