pub mod events {
    pub mod name_event;
}
