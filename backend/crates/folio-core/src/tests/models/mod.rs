mod new_user;
mod role;
