pub mod add_patron_cmd;
