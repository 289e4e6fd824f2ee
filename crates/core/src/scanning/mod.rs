pub mod path_scanner;
