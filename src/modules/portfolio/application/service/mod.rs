mod get_portfolio_service;

pub use get_portfolio_service::GetPortfolioService;
