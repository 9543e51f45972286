pub mod memory_schedule_repo;
