//! Frontend tier catalog
//!
//! React 18 + Vite skeleton with routing, auth context, and pages wired to
//! the backend auth API. The Tailwind flag swaps exactly three entries:
//! `package.json` (dependencies), `vite.config.js` (plugin), and
//! `src/index.css` (stylesheet). `package.json`, `index.html`, and
//! `README.md` interpolate the project name.

use serde_json::json;

use crate::set::TemplateSet;

/// The complete frontend template set for `project_name`
pub fn template_set(project_name: &str, tailwind: bool) -> TemplateSet {
    let mut set = TemplateSet::new();

    set.insert("package.json", package_json(project_name, tailwind));
    set.insert("vite.config.js", vite_config(tailwind));
    set.insert("index.html", index_html(project_name));
    set.insert("src/main.jsx", main_jsx());
    set.insert("src/App.jsx", app_jsx());
    set.insert("src/index.css", index_css(tailwind));
    set.insert("src/components/Navbar.jsx", navbar_jsx());
    set.insert("src/components/Footer.jsx", footer_jsx());
    set.insert("src/pages/Homepage.jsx", homepage_jsx());
    set.insert("src/pages/Login.jsx", login_jsx());
    set.insert("src/pages/Signup.jsx", signup_jsx());
    set.insert("src/context/AuthContext.jsx", auth_context_jsx());
    set.insert("src/services/api.js", api_service_js());
    set.insert("src/utils/auth.js", auth_utils_js());
    set.insert("src/hooks/useAuth.js", use_auth_js());
    set.insert(".gitignore", gitignore());
    set.insert("README.md", readme(project_name));

    set
}

fn package_json(project_name: &str, tailwind: bool) -> String {
    let mut pkg = json!({
        "name": format!("{project_name}-frontend"),
        "private": true,
        "version": "0.0.0",
        "type": "module",
        "scripts": {
            "dev": "vite",
            "build": "vite build",
            "lint": "eslint . --ext js,jsx --report-unused-disable-directives --max-warnings 0",
            "preview": "vite preview"
        },
        "dependencies": {
            "react": "^18.2.0",
            "react-dom": "^18.2.0",
            "react-router-dom": "^6.15.0",
            "axios": "^1.5.0",
            "react-hot-toast": "^2.4.1"
        },
        "devDependencies": {
            "@types/react": "^18.2.15",
            "@types/react-dom": "^18.2.7",
            "@vitejs/plugin-react": "^4.0.3",
            "eslint": "^8.45.0",
            "eslint-plugin-react": "^7.32.2",
            "eslint-plugin-react-hooks": "^4.6.0",
            "eslint-plugin-react-refresh": "^0.4.3",
            "vite": "^5.2.0"
        }
    });

    if tailwind {
        pkg["dependencies"]["@tailwindcss/vite"] = json!("^4.1.11");
        pkg["devDependencies"]["tailwindcss"] = json!("^4.1.11");
        pkg["devDependencies"]["autoprefixer"] = json!("^10.4.15");
        pkg["devDependencies"]["postcss"] = json!("^8.4.29");
    }

    serde_json::to_string_pretty(&pkg).unwrap()
}

fn vite_config(tailwind: bool) -> &'static str {
    if tailwind {
        r#"import { defineConfig } from 'vite';
import react from '@vitejs/plugin-react';
import tailwindcss from '@tailwindcss/vite';

export default defineConfig({
  plugins: [
    react(),
    tailwindcss(),
  ],
  server: {
    proxy: {
      '/api': {
        target: 'http://localhost:5000', // Backend URL
        changeOrigin: true,
        secure: false,
      }
    }
  }
})"#
    } else {
        r#"import { defineConfig } from 'vite';
import react from '@vitejs/plugin-react';

export default defineConfig({
  plugins: [
    react(),
  ],
  server: {
    proxy: {
      '/api': {
        target: 'http://localhost:5000', // Backend URL
        changeOrigin: true,
        secure: false,
      }
    }
  }
})"#
    }
}

fn index_html(project_name: &str) -> String {
    format!(
        r#"<!doctype html>
<html lang="en">
  <head>
    <meta charset="UTF-8" />
    <link rel="icon" type="image/svg+xml" href="/vite.svg" />
    <meta name="viewport" content="width=device-width, initial-scale=1.0" />
    <title>{project_name}</title>
  </head>
  <body>
    <div id="root"></div>
    <script type="module" src="/src/main.jsx"></script>
  </body>
</html>"#
    )
}

fn main_jsx() -> &'static str {
    r#"import React from 'react'
import ReactDOM from 'react-dom/client'
import App from './App.jsx'
import './index.css'
import { AuthProvider } from './context/AuthContext'
import { Toaster } from 'react-hot-toast'

ReactDOM.createRoot(document.getElementById('root')).render(
  <React.StrictMode>
    <AuthProvider>
      <App />
      <Toaster position="top-right" />
    </AuthProvider>
  </React.StrictMode>,
)"#
}

fn app_jsx() -> &'static str {
    r#"import { BrowserRouter as Router, Routes, Route } from 'react-router-dom'
import Navbar from './components/Navbar'
import Footer from './components/Footer'
import Homepage from './pages/Homepage'
import Login from './pages/Login'
import Signup from './pages/Signup'
import { useAuth } from './hooks/useAuth'

function App() {
  const { loading } = useAuth()

  if (loading) {
    return (
      <div className="min-h-screen flex items-center justify-center">
        <div className="animate-spin rounded-full h-12 w-12 border-b-2 border-blue-600"></div>
      </div>
    )
  }

  return (
    <Router>
      <div className="min-h-screen flex flex-col">
        <Navbar />
        <main className="flex-1">
          <Routes>
            <Route path="/" element={<Homepage />} />
            <Route path="/login" element={<Login />} />
            <Route path="/signup" element={<Signup />} />
          </Routes>
        </main>
        <Footer />
      </div>
    </Router>
  )
}

export default App"#
}

fn index_css(tailwind: bool) -> &'static str {
    if tailwind {
        r#"@import "tailwindcss";"#
    } else {
        r#":root {
  font-family: system-ui, Avenir, Helvetica, Arial, sans-serif;
  line-height: 1.5;
}

* {
  margin: 0;
  padding: 0;
  box-sizing: border-box;
}

body {
  min-height: 100vh;
  color: #213547;
  background-color: #ffffff;
}"#
    }
}

fn navbar_jsx() -> &'static str {
    r#"import { useState } from 'react'
import { Link, useNavigate } from 'react-router-dom'
import { useAuth } from '../hooks/useAuth'

const Navbar = () => {
  const [isOpen, setIsOpen] = useState(false)
  const { user, logout } = useAuth()
  const navigate = useNavigate()

  const handleLogout = async () => {
    await logout()
    navigate('/')
  }

  return (
    <nav className="bg-white shadow-md">
      <div className="max-w-7xl mx-auto px-4">
        <div className="flex justify-between items-center h-16">
          <Link to="/" className="text-xl font-bold text-blue-600">
            MERN App
          </Link>

          <div className="hidden md:flex items-center space-x-4">
            <Link to="/" className="text-gray-700 hover:text-blue-600">
              Home
            </Link>

            {user ? (
              <div className="flex items-center space-x-4">
                <span className="text-gray-700">Welcome, {user.name}</span>
                <button
                  onClick={handleLogout}
                  className="bg-red-600 text-white px-4 py-2 rounded hover:bg-red-700"
                >
                  Logout
                </button>
              </div>
            ) : (
              <div className="flex items-center space-x-4">
                <Link to="/login" className="text-gray-700 hover:text-blue-600">
                  Login
                </Link>
                <Link
                  to="/signup"
                  className="bg-blue-600 text-white px-4 py-2 rounded hover:bg-blue-700"
                >
                  Sign Up
                </Link>
              </div>
            )}
          </div>

          <button
            className="md:hidden"
            onClick={() => setIsOpen(!isOpen)}
          >
            <span className="text-2xl">{isOpen ? 'x' : '='}</span>
          </button>
        </div>

        {isOpen && (
          <div className="md:hidden pb-4">
            <Link
              to="/"
              className="block py-2 text-gray-700 hover:text-blue-600"
              onClick={() => setIsOpen(false)}
            >
              Home
            </Link>
            {user ? (
              <>
                <span className="block py-2 text-gray-700">Welcome, {user.name}</span>
                <button
                  onClick={() => {
                    handleLogout()
                    setIsOpen(false)
                  }}
                  className="block py-2 text-red-600 hover:text-red-700"
                >
                  Logout
                </button>
              </>
            ) : (
              <>
                <Link
                  to="/login"
                  className="block py-2 text-gray-700 hover:text-blue-600"
                  onClick={() => setIsOpen(false)}
                >
                  Login
                </Link>
                <Link
                  to="/signup"
                  className="block py-2 text-blue-600 hover:text-blue-700"
                  onClick={() => setIsOpen(false)}
                >
                  Sign Up
                </Link>
              </>
            )}
          </div>
        )}
      </div>
    </nav>
  )
}

export default Navbar"#
}

fn footer_jsx() -> &'static str {
    r##"import { Link } from 'react-router-dom'

const Footer = () => {
  const currentYear = new Date().getFullYear()

  return (
    <footer className="bg-gray-900 text-white py-8">
      <div className="max-w-7xl mx-auto px-4">
        <div className="grid grid-cols-1 md:grid-cols-3 gap-8">
          <div>
            <h3 className="text-lg font-bold mb-4">MERN App</h3>
            <p className="text-gray-400">
              A modern full-stack application built with MongoDB, Express.js, React, and Node.js.
            </p>
          </div>

          <div>
            <h4 className="font-semibold mb-4">Quick Links</h4>
            <ul className="space-y-2">
              <li><Link to="/" className="text-gray-400 hover:text-white">Home</Link></li>
              <li><Link to="/login" className="text-gray-400 hover:text-white">Login</Link></li>
              <li><Link to="/signup" className="text-gray-400 hover:text-white">Sign Up</Link></li>
            </ul>
          </div>

          <div>
            <h4 className="font-semibold mb-4">Support</h4>
            <ul className="space-y-2">
              <li><a href="#" className="text-gray-400 hover:text-white">Documentation</a></li>
              <li><a href="#" className="text-gray-400 hover:text-white">Help Center</a></li>
              <li><a href="#" className="text-gray-400 hover:text-white">Community</a></li>
            </ul>
          </div>
        </div>

        <div className="border-t border-gray-800 mt-8 pt-8 text-center">
          <p className="text-gray-400">(c) {currentYear} MERN App. All rights reserved.</p>
        </div>
      </div>
    </footer>
  )
}

export default Footer"##
}

fn homepage_jsx() -> &'static str {
    r#"import { Link } from 'react-router-dom'
import { useAuth } from '../hooks/useAuth'

const Homepage = () => {
  const { user } = useAuth()

  return (
    <div className="min-h-screen">
      <section className="bg-gradient-to-r from-blue-50 to-purple-50 py-20">
        <div className="max-w-7xl mx-auto px-4 text-center">
          <h1 className="text-4xl md:text-6xl font-bold text-gray-900 mb-6">
            Welcome to MERN Stack
          </h1>
          <p className="text-xl text-gray-600 mb-8 max-w-3xl mx-auto">
            A modern, production-ready full-stack application built with MongoDB,
            Express.js, React, and Node.js.
          </p>

          {user ? (
            <div className="space-y-4">
              <h2 className="text-2xl font-semibold text-gray-800">
                Welcome back, {user.name}!
              </h2>
              <p className="text-gray-600">
                You're successfully logged in and ready to explore.
              </p>
            </div>
          ) : (
            <div className="flex flex-col sm:flex-row gap-4 justify-center">
              <Link
                to="/signup"
                className="bg-blue-600 text-white px-8 py-3 rounded-lg text-lg hover:bg-blue-700"
              >
                Get Started
              </Link>
              <Link
                to="/login"
                className="bg-gray-200 text-gray-900 px-8 py-3 rounded-lg text-lg hover:bg-gray-300"
              >
                Sign In
              </Link>
            </div>
          )}
        </div>
      </section>

      <section className="py-20 bg-white">
        <div className="max-w-7xl mx-auto px-4">
          <div className="text-center mb-16">
            <h2 className="text-3xl md:text-4xl font-bold text-gray-900 mb-4">
              Built with Modern Technologies
            </h2>
            <p className="text-xl text-gray-600">
              Everything you need to build scalable, maintainable web applications
            </p>
          </div>

          <div className="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-8">
            <div className="bg-white p-6 rounded-lg shadow-md border text-center">
              <h3 className="text-xl font-semibold text-gray-900 mb-2">MongoDB</h3>
              <p className="text-gray-600">Flexible NoSQL database for modern applications</p>
            </div>

            <div className="bg-white p-6 rounded-lg shadow-md border text-center">
              <h3 className="text-xl font-semibold text-gray-900 mb-2">Express.js</h3>
              <p className="text-gray-600">Fast, unopinionated web framework for Node.js</p>
            </div>

            <div className="bg-white p-6 rounded-lg shadow-md border text-center">
              <h3 className="text-xl font-semibold text-gray-900 mb-2">React</h3>
              <p className="text-gray-600">A JavaScript library for building user interfaces</p>
            </div>

            <div className="bg-white p-6 rounded-lg shadow-md border text-center">
              <h3 className="text-xl font-semibold text-gray-900 mb-2">Node.js</h3>
              <p className="text-gray-600">JavaScript runtime built on Chrome's V8 engine</p>
            </div>
          </div>
        </div>
      </section>
    </div>
  )
}

export default Homepage"#
}

fn login_jsx() -> &'static str {
    r#"import { useState } from 'react'
import { Link, useNavigate } from 'react-router-dom'
import { useAuth } from '../hooks/useAuth'
import toast from 'react-hot-toast'

const Login = () => {
  const [formData, setFormData] = useState({
    email: '',
    password: ''
  })
  const [loading, setLoading] = useState(false)
  const { login } = useAuth()
  const navigate = useNavigate()

  const handleChange = (e) => {
    setFormData({
      ...formData,
      [e.target.name]: e.target.value
    })
  }

  const handleSubmit = async (e) => {
    e.preventDefault()
    setLoading(true)

    try {
      await login(formData.email, formData.password)
      toast.success('Login successful!')
      navigate('/')
    } catch (error) {
      toast.error(error.message || 'Login failed')
    } finally {
      setLoading(false)
    }
  }

  return (
    <div className="min-h-screen flex items-center justify-center bg-gray-50 py-12 px-4">
      <div className="max-w-md w-full space-y-8">
        <div className="bg-white p-8 rounded-lg shadow-md">
          <h2 className="text-2xl font-bold text-center text-gray-900 mb-6">Sign In</h2>
          <p className="text-center text-gray-600 mb-8">Welcome back! Please sign in to your account.</p>

          <form onSubmit={handleSubmit} className="space-y-6">
            <div>
              <label htmlFor="email" className="block text-sm font-medium text-gray-700 mb-2">
                Email
              </label>
              <input
                type="email"
                id="email"
                name="email"
                value={formData.email}
                onChange={handleChange}
                required
                className="w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500"
              />
            </div>

            <div>
              <label htmlFor="password" className="block text-sm font-medium text-gray-700 mb-2">
                Password
              </label>
              <input
                type="password"
                id="password"
                name="password"
                value={formData.password}
                onChange={handleChange}
                required
                className="w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500"
              />
            </div>

            <button
              type="submit"
              disabled={loading}
              className="w-full bg-blue-600 text-white py-2 px-4 rounded-md hover:bg-blue-700 disabled:opacity-50"
            >
              {loading ? 'Signing In...' : 'Sign In'}
            </button>
          </form>

          <div className="mt-6 text-center">
            <p className="text-gray-600">
              Don't have an account?{' '}
              <Link to="/signup" className="text-blue-600 hover:text-blue-700">
                Sign up here
              </Link>
            </p>
          </div>
        </div>
      </div>
    </div>
  )
}

export default Login"#
}

fn signup_jsx() -> &'static str {
    r#"import { useState } from 'react'
import { Link, useNavigate } from 'react-router-dom'
import { useAuth } from '../hooks/useAuth'
import toast from 'react-hot-toast'

const Signup = () => {
  const [formData, setFormData] = useState({
    name: '',
    email: '',
    password: '',
    confirmPassword: ''
  })
  const [loading, setLoading] = useState(false)
  const { register } = useAuth()
  const navigate = useNavigate()

  const handleChange = (e) => {
    setFormData({
      ...formData,
      [e.target.name]: e.target.value
    })
  }

  const handleSubmit = async (e) => {
    e.preventDefault()

    if (formData.password !== formData.confirmPassword) {
      toast.error('Passwords do not match')
      return
    }

    if (formData.password.length < 6) {
      toast.error('Password must be at least 6 characters')
      return
    }

    setLoading(true)

    try {
      await register(formData.name, formData.email, formData.password)
      toast.success('Account created successfully!')
      navigate('/')
    } catch (error) {
      toast.error(error.message || 'Registration failed')
    } finally {
      setLoading(false)
    }
  }

  return (
    <div className="min-h-screen flex items-center justify-center bg-gray-50 py-12 px-4">
      <div className="max-w-md w-full space-y-8">
        <div className="bg-white p-8 rounded-lg shadow-md">
          <h2 className="text-2xl font-bold text-center text-gray-900 mb-6">Create Account</h2>
          <p className="text-center text-gray-600 mb-8">Join us today! Create your account to get started.</p>

          <form onSubmit={handleSubmit} className="space-y-6">
            <div>
              <label htmlFor="name" className="block text-sm font-medium text-gray-700 mb-2">
                Full Name
              </label>
              <input
                type="text"
                id="name"
                name="name"
                value={formData.name}
                onChange={handleChange}
                required
                className="w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500"
              />
            </div>

            <div>
              <label htmlFor="email" className="block text-sm font-medium text-gray-700 mb-2">
                Email
              </label>
              <input
                type="email"
                id="email"
                name="email"
                value={formData.email}
                onChange={handleChange}
                required
                className="w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500"
              />
            </div>

            <div>
              <label htmlFor="password" className="block text-sm font-medium text-gray-700 mb-2">
                Password
              </label>
              <input
                type="password"
                id="password"
                name="password"
                value={formData.password}
                onChange={handleChange}
                required
                className="w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500"
              />
            </div>

            <div>
              <label htmlFor="confirmPassword" className="block text-sm font-medium text-gray-700 mb-2">
                Confirm Password
              </label>
              <input
                type="password"
                id="confirmPassword"
                name="confirmPassword"
                value={formData.confirmPassword}
                onChange={handleChange}
                required
                className="w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500"
              />
            </div>

            <button
              type="submit"
              disabled={loading}
              className="w-full bg-blue-600 text-white py-2 px-4 rounded-md hover:bg-blue-700 disabled:opacity-50"
            >
              {loading ? 'Creating Account...' : 'Create Account'}
            </button>
          </form>

          <div className="mt-6 text-center">
            <p className="text-gray-600">
              Already have an account?{' '}
              <Link to="/login" className="text-blue-600 hover:text-blue-700">
                Sign in here
              </Link>
            </p>
          </div>
        </div>
      </div>
    </div>
  )
}

export default Signup"#
}

fn auth_context_jsx() -> &'static str {
    r#"import { createContext, useState, useEffect } from 'react'
import { api } from '../services/api'
import { getToken, setToken, removeToken } from '../utils/auth'

const AuthContext = createContext()

export const AuthProvider = ({ children }) => {
  const [user, setUser] = useState(null)
  const [loading, setLoading] = useState(true)

  useEffect(() => {
    const token = getToken()
    if (token) {
      checkAuth()
    } else {
      setLoading(false)
    }
  }, [])

  const checkAuth = async () => {
    try {
      const response = await api.get('/auth/me')
      setUser(response.data.user)
    } catch (error) {
      removeToken()
    } finally {
      setLoading(false)
    }
  }

  const login = async (email, password) => {
    const response = await api.post('/auth/signin', { email, password })
    const { token, user } = response.data

    setToken(token)
    setUser(user)

    return response.data
  }

  const register = async (name, email, password) => {
    const response = await api.post('/auth/signup', { name, email, password })
    const { token, user } = response.data

    setToken(token)
    setUser(user)

    return response.data
  }

  const logout = () => {
    removeToken()
    setUser(null)
  }

  const value = {
    user,
    loading,
    login,
    register,
    logout
  }

  return (
    <AuthContext.Provider value={value}>
      {children}
    </AuthContext.Provider>
  )
}

export default AuthContext"#
}

fn api_service_js() -> &'static str {
    r#"import axios from 'axios'
import { getToken, removeToken } from '../utils/auth'

const API_URL = import.meta.env.VITE_API_URL || 'http://localhost:5000/api'

export const api = axios.create({
  baseURL: API_URL,
  headers: {
    'Content-Type': 'application/json'
  }
})

// Request interceptor to add auth token
api.interceptors.request.use(
  (config) => {
    const token = getToken()
    if (token) {
      config.headers.Authorization = `Bearer ${token}`
    }
    return config
  },
  (error) => {
    return Promise.reject(error)
  }
)

// Response interceptor to handle auth errors
api.interceptors.response.use(
  (response) => {
    return response
  },
  (error) => {
    if (error.response?.status === 401) {
      removeToken()
      window.location.href = '/login'
    }

    const message = error.response?.data?.message || error.message || 'Something went wrong'
    return Promise.reject(new Error(message))
  }
)"#
}

fn auth_utils_js() -> &'static str {
    r#"const TOKEN_KEY = 'auth_token'

export const getToken = () => {
  return localStorage.getItem(TOKEN_KEY)
}

export const setToken = (token) => {
  localStorage.setItem(TOKEN_KEY, token)
}

export const removeToken = () => {
  localStorage.removeItem(TOKEN_KEY)
}

export const isAuthenticated = () => {
  return !!getToken()
}"#
}

fn use_auth_js() -> &'static str {
    r#"import { useContext } from 'react'
import AuthContext from '../context/AuthContext'

export const useAuth = () => {
  const context = useContext(AuthContext)

  if (!context) {
    throw new Error('useAuth must be used within an AuthProvider')
  }

  return context
}"#
}

fn gitignore() -> &'static str {
    r#"# Logs
logs
*.log
npm-debug.log*
yarn-debug.log*
yarn-error.log*
pnpm-debug.log*
lerna-debug.log*

node_modules
dist
dist-ssr
*.local

# Editor directories and files
.vscode/*
!.vscode/extensions.json
.idea
.DS_Store
*.suo
*.ntvs*
*.njsproj
*.sln
*.sw?

# Environment variables
*.env
.env.local
.env.development.local
.env.test.local
.env.production.local"#
}

fn readme(project_name: &str) -> String {
    format!(
        r#"# {project_name} Frontend

React + Vite frontend application.

## Features

- **React 18** with Vite for fast development
- **React Router** for navigation
- **Axios** for API calls
- **React Hot Toast** for notifications
- **JWT Authentication** integration
- **Responsive design**

## Getting Started

1. Install dependencies:
```bash
npm install
```

2. Update environment variables if the backend is not on the default port:
```
VITE_API_URL=http://localhost:5000/api
```

3. Start development server:
```bash
npm run dev
```

## Available Scripts

- `npm run dev` - Start development server
- `npm run build` - Build for production
- `npm run preview` - Preview production build
- `npm run lint` - Run ESLint

## Project Structure

```
src/
|-- components/      # Reusable components
|-- pages/           # Page components
|-- context/         # React context providers
|-- hooks/           # Custom hooks
|-- services/        # API services
|-- utils/           # Utility functions
|-- App.jsx          # Main app component
`-- main.jsx         # Entry point
```
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_paths() {
        let set = template_set("demo", true);
        assert_eq!(set.len(), 17);

        for path in [
            "package.json",
            "vite.config.js",
            "index.html",
            "src/main.jsx",
            "src/App.jsx",
            "src/index.css",
            "src/components/Navbar.jsx",
            "src/components/Footer.jsx",
            "src/pages/Homepage.jsx",
            "src/pages/Login.jsx",
            "src/pages/Signup.jsx",
            "src/context/AuthContext.jsx",
            "src/services/api.js",
            "src/utils/auth.js",
            "src/hooks/useAuth.js",
            ".gitignore",
            "README.md",
        ] {
            assert!(set.contains(path), "missing entry: {path}");
        }
    }

    #[test]
    fn test_package_json_name() {
        let set = template_set("demo", true);
        let pkg: serde_json::Value =
            serde_json::from_str(set.get("package.json").unwrap()).unwrap();

        assert_eq!(pkg["name"], "demo-frontend");
        assert_eq!(pkg["scripts"]["dev"], "vite");
    }

    #[test]
    fn test_tailwind_flag_swaps_exactly_three_entries() {
        let with = template_set("demo", true);
        let without = template_set("demo", false);

        let with_paths: Vec<&str> = with.paths().collect();
        let without_paths: Vec<&str> = without.paths().collect();
        assert_eq!(with_paths, without_paths);

        let changed: Vec<&str> = with
            .iter()
            .filter(|&(path, content)| without.get(path) != Some(content))
            .map(|(path, _)| path)
            .collect();
        assert_eq!(changed, vec!["package.json", "src/index.css", "vite.config.js"]);
    }

    #[test]
    fn test_tailwind_dependencies_follow_flag() {
        let with: serde_json::Value =
            serde_json::from_str(template_set("demo", true).get("package.json").unwrap()).unwrap();
        let without: serde_json::Value =
            serde_json::from_str(template_set("demo", false).get("package.json").unwrap()).unwrap();

        assert!(with["dependencies"]["@tailwindcss/vite"].is_string());
        assert!(with["devDependencies"]["tailwindcss"].is_string());
        assert!(without["dependencies"]["@tailwindcss/vite"].is_null());
        assert!(without["devDependencies"]["tailwindcss"].is_null());
    }

    #[test]
    fn test_index_html_title_is_project_name() {
        let set = template_set("storefront", true);
        assert!(set
            .get("index.html")
            .unwrap()
            .contains("<title>storefront</title>"));
    }

    #[test]
    fn test_stylesheet_follows_flag() {
        let with = template_set("demo", true);
        let without = template_set("demo", false);

        assert!(with.get("src/index.css").unwrap().contains("tailwindcss"));
        assert!(!without.get("src/index.css").unwrap().contains("tailwindcss"));
    }
}
