pub mod migration_check_controller;
