use super::rule::{with_docker, with_tests, Content, FileRule};
use super::{Ecosystem, TemplateEntry, TemplateId};

const NPM_NEXT_STEPS: &[&str] = &["npm install", "npm run dev"];

pub fn react() -> TemplateEntry {
    TemplateEntry {
        id: TemplateId::React,
        name: "React App",
        description: "React application with Vite",
        ecosystem: Ecosystem::JavaScript,
        next_steps: NPM_NEXT_STEPS,
        rules: vec![
            FileRule::always("README.md", Content::Template(REACT_README)),
            FileRule::always(".gitignore", Content::Static(REACT_GITIGNORE)),
            FileRule::always("package.json", Content::Template(REACT_PACKAGE)),
            FileRule::always("tests/.gitkeep", Content::Static("")),
            FileRule::always("vite.config.js", Content::Static(VITE_CONFIG)),
            FileRule::always("index.html", Content::Template(REACT_INDEX_HTML)),
            FileRule::always("src/main.jsx", Content::Static(REACT_MAIN)),
            FileRule::always("src/App.jsx", Content::Template(REACT_APP)),
            FileRule::always("src/index.css", Content::Static(BASE_CSS)),
            FileRule::always("src/App.css", Content::Static(REACT_APP_CSS)),
            FileRule::when("tests/smoke.test.mjs", Content::Template(SMOKE_TEST), with_tests),
            FileRule::when("Dockerfile", Content::Static(STATIC_SITE_DOCKERFILE), with_docker),
            FileRule::when(".dockerignore", Content::Static(DOCKERIGNORE), with_docker),
        ],
    }
}

pub fn nextjs() -> TemplateEntry {
    TemplateEntry {
        id: TemplateId::Nextjs,
        name: "Next.js",
        description: "Next.js application",
        ecosystem: Ecosystem::JavaScript,
        next_steps: NPM_NEXT_STEPS,
        rules: vec![
            FileRule::always("README.md", Content::Template(NEXT_README)),
            FileRule::always(".gitignore", Content::Static(NEXT_GITIGNORE)),
            FileRule::always("package.json", Content::Template(NEXT_PACKAGE)),
            FileRule::always("tests/.gitkeep", Content::Static("")),
            FileRule::always("next.config.js", Content::Static(NEXT_CONFIG)),
            FileRule::always("tsconfig.json", Content::Static(NEXT_TSCONFIG)),
            FileRule::always("app/layout.tsx", Content::Template(NEXT_LAYOUT)),
            FileRule::always("app/page.tsx", Content::Template(NEXT_PAGE)),
            FileRule::always("app/globals.css", Content::Static(BASE_CSS)),
            FileRule::when("tests/smoke.test.mjs", Content::Template(SMOKE_TEST), with_tests),
            FileRule::when("Dockerfile", Content::Static(NEXT_DOCKERFILE), with_docker),
            FileRule::when(".dockerignore", Content::Static(DOCKERIGNORE), with_docker),
        ],
    }
}

pub fn node_api() -> TemplateEntry {
    TemplateEntry {
        id: TemplateId::NodeApi,
        name: "Node.js API",
        description: "Node.js Express API",
        ecosystem: Ecosystem::JavaScript,
        next_steps: NPM_NEXT_STEPS,
        rules: vec![
            FileRule::always("README.md", Content::Template(NODE_README)),
            FileRule::always(".gitignore", Content::Static(NODE_GITIGNORE)),
            FileRule::always("package.json", Content::Template(NODE_PACKAGE)),
            FileRule::always("tests/.gitkeep", Content::Static("")),
            FileRule::always("src/index.js", Content::Static(NODE_INDEX)),
            FileRule::when("tests/smoke.test.mjs", Content::Template(SMOKE_TEST), with_tests),
            FileRule::when("Dockerfile", Content::Static(NODE_DOCKERFILE), with_docker),
            FileRule::when(".dockerignore", Content::Static(DOCKERIGNORE), with_docker),
            FileRule::when(
                "docker-compose.yml",
                Content::Static(NODE_COMPOSE),
                with_docker,
            ),
        ],
    }
}

const BASE_CSS: &str = "* {
  margin: 0;
  padding: 0;
  box-sizing: border-box;
}

body {
  font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', 'Roboto', sans-serif;
}
";

const DOCKERIGNORE: &str = "node_modules
npm-debug.log
.git
.gitignore
README.md
";

// .mjs so it runs as an ES module regardless of the package "type".
const SMOKE_TEST: &str = r#"import { test } from 'node:test';
import assert from 'node:assert/strict';
import { readFileSync } from 'node:fs';

test('package manifest names the project', () => {
  const pkg = JSON.parse(readFileSync(new URL('../package.json', import.meta.url), 'utf8'));
  assert.equal(pkg.name, '{{ project_name }}');
});
"#;

const REACT_PACKAGE: &str = r#"{
  "name": "{{ project_name }}",
  "version": "0.1.0",
  "private": true,
  "type": "module",
  "scripts": {
    "dev": "vite",
    "build": "vite build",
    "preview": "vite preview"
  },
  "dependencies": {
    "react": "^18.2.0",
    "react-dom": "^18.2.0"
  },
  "devDependencies": {
    "@types/react": "^18.2.0",
    "@types/react-dom": "^18.2.0",
    "@vitejs/plugin-react": "^4.0.0",
    "vite": "^4.4.0"
  }
}
"#;

const VITE_CONFIG: &str = "import { defineConfig } from 'vite'
import react from '@vitejs/plugin-react'

export default defineConfig({
  plugins: [react()],
})
";

const REACT_INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="UTF-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1.0" />
    <title>{{ project_name }}</title>
  </head>
  <body>
    <div id="root"></div>
    <script type="module" src="/src/main.jsx"></script>
  </body>
</html>
"#;

const REACT_MAIN: &str = "import React from 'react'
import ReactDOM from 'react-dom/client'
import App from './App.jsx'
import './index.css'

ReactDOM.createRoot(document.getElementById('root')).render(
  <React.StrictMode>
    <App />
  </React.StrictMode>,
)
";

const REACT_APP: &str = "import { useState } from 'react'
import './App.css'

function App() {
  const [count, setCount] = useState(0)

  return (
    <div className=\"App\">
      <h1>{{ project_name }}</h1>
      <div className=\"card\">
        <button onClick={() => setCount((count) => count + 1)}>
          count is {count}
        </button>
      </div>
    </div>
  )
}

export default App
";

const REACT_APP_CSS: &str = ".App {
  text-align: center;
  padding: 2rem;
}
";

const REACT_GITIGNORE: &str = "# Dependencies
node_modules/
dist/

# Build
build/
.vite/

# Environment
.env
.env.local

# IDE
.vscode/
.idea/

# OS
.DS_Store
";

const REACT_README: &str = r#"# {{ project_name }}

A React application built with Vite.

## Getting Started

```bash
npm install
npm run dev
```

## Build

```bash
npm run build
```
"#;

const STATIC_SITE_DOCKERFILE: &str = r#"FROM node:20-alpine AS build

WORKDIR /app

COPY package.json .
RUN npm install

COPY . .
RUN npm run build

FROM nginx:alpine

COPY --from=build /app/dist /usr/share/nginx/html

EXPOSE 80
"#;

const NEXT_PACKAGE: &str = r#"{
  "name": "{{ project_name }}",
  "version": "0.1.0",
  "private": true,
  "scripts": {
    "dev": "next dev",
    "build": "next build",
    "start": "next start",
    "lint": "next lint"
  },
  "dependencies": {
    "react": "^18.2.0",
    "react-dom": "^18.2.0",
    "next": "^13.5.0"
  },
  "devDependencies": {
    "@types/node": "^20.0.0",
    "@types/react": "^18.2.0",
    "@types/react-dom": "^18.2.0",
    "typescript": "^5.0.0"
  }
}
"#;

const NEXT_CONFIG: &str = "/** @type {import('next').NextConfig} */
const nextConfig = {
  reactStrictMode: true,
}

module.exports = nextConfig
";

const NEXT_TSCONFIG: &str = r#"{
  "compilerOptions": {
    "target": "es5",
    "lib": ["dom", "dom.iterable", "esnext"],
    "allowJs": true,
    "skipLibCheck": true,
    "strict": true,
    "forceConsistentCasingInFileNames": true,
    "noEmit": true,
    "esModuleInterop": true,
    "module": "esnext",
    "moduleResolution": "bundler",
    "resolveJsonModule": true,
    "isolatedModules": true,
    "jsx": "preserve",
    "incremental": true,
    "paths": {
      "@/*": ["./*"]
    }
  },
  "include": ["next-env.d.ts", "**/*.ts", "**/*.tsx"],
  "exclude": ["node_modules"]
}
"#;

const NEXT_LAYOUT: &str = "import './globals.css'

export const metadata = {
  title: '{{ project_name }}',
  description: 'Generated by quick-scaffold',
}

export default function RootLayout({
  children,
}: {
  children: React.ReactNode
}) {
  return (
    <html lang=\"en\">
      <body>{children}</body>
    </html>
  )
}
";

const NEXT_PAGE: &str = "export default function Home() {
  return (
    <main>
      <h1>{{ project_name }}</h1>
      <p>Welcome to your Next.js app!</p>
    </main>
  )
}
";

const NEXT_GITIGNORE: &str = "# Dependencies
node_modules/
.next/
out/

# Environment
.env
.env.local

# IDE
.vscode/
.idea/

# OS
.DS_Store
";

const NEXT_README: &str = r#"# {{ project_name }}

A Next.js application.

## Getting Started

```bash
npm install
npm run dev
```

Open [http://localhost:3000](http://localhost:3000) in your browser.
"#;

const NEXT_DOCKERFILE: &str = r#"FROM node:20-alpine

WORKDIR /app

COPY package.json .
RUN npm install

COPY . .
RUN npm run build

EXPOSE 3000

CMD ["npm", "start"]
"#;

const NODE_PACKAGE: &str = r#"{
  "name": "{{ project_name }}",
  "version": "0.1.0",
  "type": "module",
  "main": "src/index.js",
  "scripts": {
    "dev": "node --watch src/index.js",
    "start": "node src/index.js"
  },
  "dependencies": {
    "express": "^4.18.0"
  },
  "devDependencies": {}
}
"#;

const NODE_INDEX: &str = "import express from 'express';

const app = express();
const PORT = process.env.PORT || 3000;

app.use(express.json());

app.get('/', (req, res) => {
  res.json({ message: 'Hello, World!' });
});

app.get('/health', (req, res) => {
  res.json({ status: 'healthy' });
});

app.listen(PORT, () => {
  console.log(`Server running on http://localhost:${PORT}`);
});
";

const NODE_GITIGNORE: &str = "# Dependencies
node_modules/

# Environment
.env
.env.local

# IDE
.vscode/
.idea/

# OS
.DS_Store
";

const NODE_README: &str = r#"# {{ project_name }}

A Node.js Express API.

## Installation

```bash
npm install
```

## Usage

```bash
npm run dev
```

Server will run on http://localhost:3000
"#;

const NODE_DOCKERFILE: &str = r#"FROM node:20-alpine

WORKDIR /app

COPY package.json .
RUN npm install --omit=dev

COPY . .

EXPOSE 3000

CMD ["node", "src/index.js"]
"#;

const NODE_COMPOSE: &str = r#"services:
  api:
    build: .
    ports:
      - "3000:3000"
    environment:
      - PORT=3000
"#;
