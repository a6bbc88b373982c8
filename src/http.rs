use crate::global;
use crate::log_value::LogValue;
use crate::logger::Logger;
use futures::future::BoxFuture;
use http::Request;
use std::sync::Arc;
use std::task::{Context, Poll};
use std::time::Instant;
use tower::{Layer, Service};

/// 请求日志格式：方法、URI、名称、耗时
const HTTP_LOG_FORMAT: &str = "Method: {}\tURI: {}\tName: {}\tTime: {}";

/// HTTP 请求日志中间件
///
/// 内层服务处理完成后以 LOG 级别输出一行请求日志；日志写入失败时以 ERR 级别报告
#[derive(Clone)]
pub struct HttpLogLayer {
    logger: Arc<Logger>,
    name: Arc<str>,
}

impl HttpLogLayer {
    pub fn new(logger: Arc<Logger>, name: &str) -> Self {
        Self {
            logger,
            name: Arc::from(name),
        }
    }
}

/// 使用全局 Logger 创建请求日志中间件
pub fn http_logger(name: &str) -> HttpLogLayer {
    HttpLogLayer::new(global::get(), name)
}

impl<S> Layer<S> for HttpLogLayer {
    type Service = HttpLogService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        HttpLogService {
            inner,
            logger: Arc::clone(&self.logger),
            name: Arc::clone(&self.name),
        }
    }
}

#[derive(Clone)]
pub struct HttpLogService<S> {
    inner: S,
    logger: Arc<Logger>,
    name: Arc<str>,
}

impl<S, B> Service<Request<B>> for HttpLogService<S>
where
    S: Service<Request<B>>,
    S::Future: Send + 'static,
    S::Response: Send + 'static,
    S::Error: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = BoxFuture<'static, Result<S::Response, S::Error>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request<B>) -> Self::Future {
        let method = req.method().to_string();
        let uri = req.uri().to_string();
        let logger = Arc::clone(&self.logger);
        let name = Arc::clone(&self.name);
        let start = Instant::now();

        let future = self.inner.call(req);
        Box::pin(async move {
            let result = future.await;
            let args = [
                LogValue::from(method),
                LogValue::from(uri),
                LogValue::from(&*name),
                LogValue::display(format_args!("{:?}", start.elapsed())),
            ];
            if let Err(e) = logger.logf(HTTP_LOG_FORMAT, &args) {
                let _ = logger.error(&[LogValue::display(e)]);
            }
            result
        })
    }
}
