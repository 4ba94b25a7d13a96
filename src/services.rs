pub mod aws_service;
