//! Stylesheet installed in every card's shadow root.
//!
//! Only `:host` and selectors for elements inside the root appear here. The
//! shadow boundary keeps these rules from reaching the host document, and
//! document rules other than inherited properties cannot reach in.

/// Fixed card presentation: shape, hover elevation, typography, star colour,
/// and image fit.
pub const CARD_STYLE: &str = "\
:host {
  display: block;
  font-family: 'Roboto', 'Helvetica Neue', sans-serif;
  box-shadow: 0 1px 3px rgba(60, 64, 67, 0.3);
  border-radius: 8px;
  background-color: #fff;
  overflow: hidden;
  transition: box-shadow 0.3s ease;
  max-width: 360px;
  margin: 12px auto;
}
:host(:hover) {
  box-shadow: 0 4px 8px rgba(60, 64, 67, 0.3);
}
article {
  padding: 16px;
}
img {
  width: 100%;
  height: auto;
  object-fit: cover;
  border-bottom: 1px solid #eee;
}
.title {
  font-size: 1.1rem;
  font-weight: 500;
  margin: 12px 0 4px;
}
.title a {
  text-decoration: none;
  color: #1a73e8;
}
.title a:hover {
  text-decoration: underline;
}
.organization {
  font-size: 0.9rem;
  color: #5f6368;
  margin-bottom: 8px;
}
.rating {
  display: flex;
  align-items: center;
  font-size: 0.9rem;
  color: #fbbc04;
  margin-bottom: 8px;
}
.rating span:last-child {
  color: #5f6368;
  font-size: 0.85rem;
  margin-left: 6px;
}
time {
  display: block;
  font-size: 0.85rem;
  color: #5f6368;
  margin-bottom: 8px;
}
.ingredients {
  font-size: 0.9rem;
  color: #202124;
  line-height: 1.4;
}
";
