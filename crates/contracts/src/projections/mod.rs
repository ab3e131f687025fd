pub mod p900_occupancy_report;
