pub mod batch_executor;
pub mod batch_logger;
pub mod infrastructure;
pub mod output_path;
pub mod process_directory_use_case;
pub mod process_image_use_case;

#[cfg(test)]
pub(crate) mod test_support;
