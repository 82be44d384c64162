pub mod assets;
pub mod page;
pub mod routes;
pub mod settings;

#[macro_export]
macro_rules! print_and_ret{
	($err: expr, $ret_str: expr) => {{
		tracing::error!($ret_str);
		return ($err, format!($ret_str));
	}};
	($ret_str:expr) => {
		$crate::print_and_ret!(axum::http::StatusCode::INTERNAL_SERVER_ERROR, $ret_str)
	}
}
