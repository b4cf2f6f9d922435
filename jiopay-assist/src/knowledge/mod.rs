//! Static knowledge base of JioPay help articles.
//!
//! Stands in for a real document database. Order is significant: relevance
//! matching returns the first matches in this order.

use std::sync::Arc;

use crate::models::Document;

#[derive(Debug, Clone)]
pub struct KnowledgeStore {
    documents: Arc<[Document]>,
}

impl KnowledgeStore {
    pub fn new(documents: Vec<Document>) -> Self {
        Self {
            documents: documents.into(),
        }
    }

    /// The built-in JioPay FAQ and feature articles.
    pub fn builtin() -> Self {
        Self::new(builtin_documents())
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl Default for KnowledgeStore {
    fn default() -> Self {
        Self::builtin()
    }
}

fn builtin_documents() -> Vec<Document> {
    vec![
        Document::new(
            "What is JioPay?",
            "/faqs/what-is-jiopay",
            "JioPay is a digital payment solution that allows users to make secure payments, \
             transfer money, pay bills, and more using their smartphone. It's designed to make \
             digital transactions simple, fast, and secure.",
        ),
        Document::new(
            "How to create a JioPay account",
            "/faqs/create-account",
            "To create a JioPay account, download the JioPay app from the App Store or Google \
             Play Store, open the app, click on 'Sign Up', enter your mobile number, verify with \
             OTP, set a PIN, and complete your profile details.",
        ),
        Document::new(
            "Payment Methods",
            "/features/payment-methods",
            "JioPay supports multiple payment methods including UPI, debit cards, credit cards, \
             net banking, and JioPay wallet. You can add and manage your payment methods in the \
             'Payment Methods' section of the app.",
        ),
        Document::new(
            "Transaction Limits",
            "/faqs/transaction-limits",
            "JioPay has daily transaction limits that vary based on your verification level. \
             Basic accounts can transact up to ₹10,000 per day, while fully verified accounts can \
             transact up to ₹1,00,000 per day.",
        ),
        Document::new(
            "Security Features",
            "/features/security",
            "JioPay uses advanced security measures including end-to-end encryption, two-factor \
             authentication, and PIN/biometric protection for all transactions. We also have \
             24/7 fraud monitoring to keep your money safe.",
        ),
    ]
}
