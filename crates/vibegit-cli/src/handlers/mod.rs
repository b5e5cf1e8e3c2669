pub mod health;
pub mod rounds_list;
pub mod rounds_show;
pub mod serve;
