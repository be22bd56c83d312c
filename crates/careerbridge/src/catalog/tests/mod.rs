mod common;
mod pager;
mod saved;
