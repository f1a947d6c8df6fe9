pub mod overridden_options;
