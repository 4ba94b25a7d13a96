pub mod cloud_instance;
