mod register_request;
mod session_cookie;
