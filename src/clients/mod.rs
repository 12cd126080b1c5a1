pub mod page_client;
