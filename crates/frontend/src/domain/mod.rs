pub mod a001_random_user;
